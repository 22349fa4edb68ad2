//! # 책 요청 본문 검증
//!
//! 생성(POST)과 수정(PUT)이 공유하는 순수 검증 함수입니다.
//! HTTP와 저장소를 전혀 모르며, 원시 요청(BookPayload)을 받아
//! 확정된 데이터(BookDraft) 또는 실패 분류(ValidationFailure)를 돌려줍니다.
//!
//! 검사 순서가 곧 사용자에게 보이는 에러 메시지를 결정합니다.
//! **먼저 걸리는 규칙 하나만 보고합니다** (first failing check wins):
//! 1. name이 있고 비어 있지 않은가
//! 2. year / pageCount / readPage가 모두 정수인가
//! 3. 세 값 중 음수가 없는가
//! 4. reading이 불리언인가
//!
//! readPage ≤ pageCount 규칙은 위 네 단계가 통과한 뒤
//! 핸들러가 따로 확인합니다. (ValidationFailure::ReadPageExceedsPageCount)

use serde_json::Value;

use crate::models::{BookDraft, BookPayload};

/// 어떤 작업의 검증인지 나타냅니다. 실패 메시지의 접두어를 결정합니다.
/// 생성: "Gagal menambahkan buku. ...", 수정: "Gagal memperbarui buku. ..."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Create,
    Update,
}

impl BookAction {
    fn verb(self) -> &'static str {
        match self {
            BookAction::Create => "menambahkan",
            BookAction::Update => "memperbarui",
        }
    }
}

/// 검증 실패의 분류
///
/// 메시지 문자열이 아니라 분류(enum)로 돌려주는 이유:
/// 같은 실패라도 작업(생성/수정)에 따라 접두어가 다르기 때문입니다.
/// 최종 문자열은 `message()`에서 조립합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// name 필드가 없거나 빈 문자열
    MissingName,
    /// year / pageCount / readPage 중 하나가 없거나 정수가 아님
    MalformedNumber,
    /// year / pageCount / readPage 중 하나가 음수
    NegativeNumber,
    /// reading 필드가 없거나 불리언이 아님
    InvalidReadingFlag,
    /// readPage가 pageCount보다 큼 (핸들러가 별도로 검사)
    ReadPageExceedsPageCount,
}

impl ValidationFailure {
    /// 클라이언트에게 보낼 실패 메시지를 조립합니다.
    pub fn message(self, action: BookAction) -> String {
        let detail = match self {
            ValidationFailure::MissingName => "Mohon isi nama buku",
            ValidationFailure::MalformedNumber => {
                "Mohon isi year, pageCount, dan readPage dengan benar."
            }
            ValidationFailure::NegativeNumber => {
                "year, pageCount, dan readPage tidak boleh negatif."
            }
            ValidationFailure::InvalidReadingFlag => {
                "Mohon isi reading dengan benar (true/false)."
            }
            ValidationFailure::ReadPageExceedsPageCount => {
                "readPage tidak boleh lebih besar dari pageCount"
            }
        };
        format!("Gagal {} buku. {}", action.verb(), detail)
    }
}

/// 요청 본문을 검증하고 확정된 BookDraft로 변환합니다.
///
/// 부수 효과가 없는 순수 함수입니다. 실패해도 아무것도 변하지 않으므로
/// 핸들러는 Err를 받으면 저장소를 건드리지 않고 즉시 400을 반환하면 됩니다.
pub fn validate_book(payload: &BookPayload) -> Result<BookDraft, ValidationFailure> {
    // 1. name: 문자열이면서 비어 있지 않아야 합니다.
    //    필드가 없거나, 문자열이 아니거나, ""이면 모두 MissingName으로 분류합니다.
    let name = match payload.name.as_ref().and_then(Value::as_str) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => return Err(ValidationFailure::MissingName),
    };

    // 2. 숫자 필드 셋 모두 정수여야 합니다. (없거나 정수가 아니면 Malformed)
    //    소수(2020.5)는 as_i64()가 None을 돌려주므로 함께 걸러집니다.
    let year = parse_integer(payload.year.as_ref())?;
    let page_count = parse_integer(payload.page_count.as_ref())?;
    let read_page = parse_integer(payload.read_page.as_ref())?;

    // 3. 정수임이 확인된 뒤에야 음수 검사를 합니다.
    if year < 0 || page_count < 0 || read_page < 0 {
        return Err(ValidationFailure::NegativeNumber);
    }

    // 4. reading은 JSON 불리언이어야 합니다.
    let reading = match payload.reading.as_ref().and_then(Value::as_bool) {
        Some(flag) => flag,
        None => return Err(ValidationFailure::InvalidReadingFlag),
    };

    Ok(BookDraft {
        name,
        year,
        author: payload.author.clone(),
        summary: payload.summary.clone(),
        publisher: payload.publisher.clone(),
        page_count,
        read_page,
        reading,
    })
}

fn parse_integer(value: Option<&Value>) -> Result<i64, ValidationFailure> {
    value
        .and_then(Value::as_i64)
        .ok_or(ValidationFailure::MalformedNumber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// 모든 규칙을 통과하는 기준 페이로드
    fn valid_payload() -> BookPayload {
        BookPayload {
            name: Some(json!("Buku A")),
            year: Some(json!(2020)),
            author: Some("John Doe".to_string()),
            summary: Some("Ringkasan".to_string()),
            publisher: Some("Dicoding".to_string()),
            page_count: Some(json!(100)),
            read_page: Some(json!(25)),
            reading: Some(json!(true)),
        }
    }

    #[test]
    fn valid_payload_becomes_draft() {
        let draft = validate_book(&valid_payload()).unwrap();
        assert_eq!(draft.name, "Buku A");
        assert_eq!(draft.year, 2020);
        assert_eq!(draft.page_count, 100);
        assert_eq!(draft.read_page, 25);
        assert!(draft.reading);
    }

    #[test]
    fn missing_name_is_rejected() {
        let mut payload = valid_payload();
        payload.name = None;
        assert_eq!(validate_book(&payload).unwrap_err(), ValidationFailure::MissingName);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut payload = valid_payload();
        payload.name = Some(json!(""));
        assert_eq!(validate_book(&payload).unwrap_err(), ValidationFailure::MissingName);
    }

    #[test]
    fn non_string_name_is_rejected() {
        let mut payload = valid_payload();
        payload.name = Some(json!(123));
        assert_eq!(validate_book(&payload).unwrap_err(), ValidationFailure::MissingName);
    }

    #[test]
    fn missing_numeric_field_is_malformed() {
        let mut payload = valid_payload();
        payload.read_page = None;
        assert_eq!(validate_book(&payload).unwrap_err(), ValidationFailure::MalformedNumber);
    }

    #[test]
    fn non_integer_numeric_field_is_malformed() {
        let mut payload = valid_payload();
        payload.year = Some(json!("2020"));
        assert_eq!(validate_book(&payload).unwrap_err(), ValidationFailure::MalformedNumber);

        let mut payload = valid_payload();
        payload.page_count = Some(json!(100.5));
        assert_eq!(validate_book(&payload).unwrap_err(), ValidationFailure::MalformedNumber);
    }

    #[test]
    fn negative_numeric_field_is_rejected() {
        let mut payload = valid_payload();
        payload.year = Some(json!(-1));
        assert_eq!(validate_book(&payload).unwrap_err(), ValidationFailure::NegativeNumber);
    }

    #[test]
    fn non_boolean_reading_is_rejected() {
        let mut payload = valid_payload();
        payload.reading = Some(json!("yes"));
        assert_eq!(validate_book(&payload).unwrap_err(), ValidationFailure::InvalidReadingFlag);

        let mut payload = valid_payload();
        payload.reading = None;
        assert_eq!(validate_book(&payload).unwrap_err(), ValidationFailure::InvalidReadingFlag);
    }

    #[test]
    fn first_failing_check_wins() {
        // name 누락과 음수 year가 동시에 있으면 name 실패가 먼저 보고됩니다.
        let mut payload = valid_payload();
        payload.name = None;
        payload.year = Some(json!(-1));
        assert_eq!(validate_book(&payload).unwrap_err(), ValidationFailure::MissingName);

        // 비정수와 음수가 섞이면 비정수(well-formed 검사)가 먼저입니다.
        let mut payload = valid_payload();
        payload.page_count = Some(json!("seratus"));
        payload.read_page = Some(json!(-5));
        assert_eq!(validate_book(&payload).unwrap_err(), ValidationFailure::MalformedNumber);
    }

    #[test]
    fn optional_strings_pass_through() {
        let mut payload = valid_payload();
        payload.author = None;
        payload.summary = None;
        payload.publisher = None;
        let draft = validate_book(&payload).unwrap();
        assert!(draft.author.is_none());
        assert!(draft.summary.is_none());
        assert!(draft.publisher.is_none());
    }

    #[test]
    fn messages_are_prefixed_by_action() {
        assert_eq!(
            ValidationFailure::MissingName.message(BookAction::Create),
            "Gagal menambahkan buku. Mohon isi nama buku"
        );
        assert_eq!(
            ValidationFailure::MissingName.message(BookAction::Update),
            "Gagal memperbarui buku. Mohon isi nama buku"
        );
        assert_eq!(
            ValidationFailure::ReadPageExceedsPageCount.message(BookAction::Create),
            "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
        );
    }
}
