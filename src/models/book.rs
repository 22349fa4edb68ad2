use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 저장소에 보관되는 책 레코드의 전체 형태
///
/// JSON 필드 이름은 camelCase(pageCount, insertedAt 등)를 사용합니다.
/// author/summary/publisher는 요청에 없었다면 응답 JSON에서도 생략됩니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub page_count: i64,
    pub read_page: i64,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: String,
    pub updated_at: String,
}

/// 목록 조회(GET /books)에서 노출하는 축약 형태
///
/// id, name, publisher 세 필드만 포함합니다. 나머지 필드는
/// 단건 조회(GET /books/{bookId})에서만 볼 수 있습니다.
#[derive(Debug, Clone, Serialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// 생성/수정 요청 본문의 원시(raw) 형태
///
/// name, year, pageCount, readPage, reading은 `serde_json::Value`로 받습니다.
/// 타입을 미리 고정하면 잘못된 타입의 요청이 역직렬화 단계에서 거부되어
/// 검증 계층(services::validation)이 "어떤 필드가 왜 잘못됐는지"를
/// 분류한 메시지를 만들 수 없기 때문입니다.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<Value>,
    pub year: Option<Value>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<Value>,
    pub read_page: Option<Value>,
    pub reading: Option<Value>,
}

/// 검증을 통과한 책 데이터
///
/// `services::validation::validate_book`이 BookPayload를 검사한 뒤
/// 확정된 타입으로 돌려주는 중간 형태입니다. 여기서 Book으로 넘어갈 때
/// id/타임스탬프/finished가 채워집니다.
#[derive(Debug)]
pub struct BookDraft {
    pub name: String,
    pub year: i64,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: i64,
    pub read_page: i64,
    pub reading: bool,
}

impl BookDraft {
    /// finished는 저장값이 아니라 파생값입니다: readPage == pageCount
    pub fn finished(&self) -> bool {
        self.read_page == self.page_count
    }

    /// 새 책 레코드를 만듭니다. insertedAt과 updatedAt은 같은 값으로 시작합니다.
    pub fn into_book(self, id: String, timestamp: String) -> Book {
        let finished = self.finished();
        Book {
            id,
            name: self.name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count,
            read_page: self.read_page,
            finished,
            reading: self.reading,
            inserted_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }

    /// 기존 레코드를 대체할 책을 만듭니다.
    /// id와 insertedAt은 원본에서 보존하고, updatedAt만 새로 찍습니다.
    pub fn into_updated_book(self, original: &Book, timestamp: String) -> Book {
        let finished = self.finished();
        Book {
            id: original.id.clone(),
            name: self.name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count,
            read_page: self.read_page,
            finished,
            reading: self.reading,
            inserted_at: original.inserted_at.clone(),
            updated_at: timestamp,
        }
    }
}

/// 현재 시각을 ISO-8601(UTC, 밀리초 단위) 문자열로 반환합니다.
/// 예: "2026-08-30T12:34:56.789Z"
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
