//! # 책 저장소(BookStore)
//!
//! 삽입 순서를 유지하는 책 레코드 컬렉션입니다.
//! 내부적으로 `Vec<Book>` 하나를 감싸고 있으며, 모든 조회는 선형 탐색입니다.
//! 이 규모(단일 프로세스, 소규모 목록)에서는 인덱스가 필요 없습니다.
//!
//! id 중복 검사는 하지 않습니다. id는 항상 핸들러가 UUID로 새로 만들어
//! 넘겨주므로, 저장소는 "호출자가 신선한 id를 준다"는 것을 신뢰합니다.

use crate::models::Book;

/// 삽입 순서가 유지되는 책 레코드 컬렉션
#[derive(Debug, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    /// 빈 저장소를 만듭니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 책을 컬렉션 끝에 추가합니다.
    pub fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    /// 전체 책 목록을 삽입 순서대로 반환합니다. (읽기 전용)
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// id가 일치하는 책을 찾습니다. 없으면 None.
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// id가 일치하는 책을 새 레코드로 교체합니다.
    /// 교체했으면 true, 해당 id가 없으면 false를 반환합니다.
    pub fn replace_by_id(&mut self, id: &str, book: Book) -> bool {
        match self.books.iter_mut().find(|b| b.id == id) {
            Some(slot) => {
                *slot = book;
                true
            }
            None => false,
        }
    }

    /// id가 일치하는 책을 제거합니다.
    /// 제거했으면 true, 해당 id가 없으면 false를 반환합니다.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        match self.books.iter().position(|b| b.id == id) {
            Some(index) => {
                self.books.remove(index);
                true
            }
            None => false,
        }
    }

    /// 저장된 책의 수
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookDraft;

    fn book(id: &str, name: &str) -> Book {
        BookDraft {
            name: name.to_string(),
            year: 2020,
            author: None,
            summary: None,
            publisher: Some("Dicoding".to_string()),
            page_count: 100,
            read_page: 0,
            reading: false,
        }
        .into_book(id.to_string(), "t0".to_string())
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = BookStore::new();
        store.append(book("a", "Pertama"));
        store.append(book("b", "Kedua"));
        store.append(book("c", "Ketiga"));
        let names: Vec<&str> = store.list().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Pertama", "Kedua", "Ketiga"]);
    }

    #[test]
    fn find_by_id_scans_the_collection() {
        let mut store = BookStore::new();
        store.append(book("a", "Pertama"));
        store.append(book("b", "Kedua"));
        assert_eq!(store.find_by_id("b").map(|b| b.name.as_str()), Some("Kedua"));
        assert!(store.find_by_id("z").is_none());
    }

    #[test]
    fn replace_by_id_overwrites_in_place() {
        let mut store = BookStore::new();
        store.append(book("a", "Pertama"));
        store.append(book("b", "Kedua"));
        assert!(store.replace_by_id("a", book("a", "Direvisi")));
        assert_eq!(store.find_by_id("a").map(|b| b.name.as_str()), Some("Direvisi"));
        // 교체는 위치를 바꾸지 않습니다.
        assert_eq!(store.list()[0].id, "a");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_by_id_reports_missing_id() {
        let mut store = BookStore::new();
        store.append(book("a", "Pertama"));
        assert!(!store.replace_by_id("z", book("z", "Hantu")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_by_id_shrinks_by_one() {
        let mut store = BookStore::new();
        store.append(book("a", "Pertama"));
        store.append(book("b", "Kedua"));
        assert!(store.remove_by_id("a"));
        assert_eq!(store.len(), 1);
        assert!(store.find_by_id("a").is_none());
        // 같은 id를 한 번 더 지우면 false
        assert!(!store.remove_by_id("a"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn new_store_is_empty() {
        let store = BookStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }
}
