//! # 책(Book) 라우트 핸들러
//!
//! 책 컬렉션의 CRUD(생성/조회/수정/삭제)를 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `POST   /books`          → 새 책 추가
//! - `GET    /books`          → 책 목록 조회 (id, name, publisher 축약형)
//! - `GET    /books/{bookId}` → 단건 조회 (전체 레코드)
//! - `PUT    /books/{bookId}` → 책 수정 (전체 필드 교체)
//! - `DELETE /books/{bookId}` → 책 삭제
//!
//! ## Axum 핸들러 패턴
//! 각 함수는 Axum의 **추출자(Extractor)** 패턴을 따릅니다:
//! - `State(state)`: 애플리케이션 공유 상태 (책 저장소)
//! - `Path(book_id)`: URL 경로의 변수 (`{bookId}` 부분)
//! - `Json(payload)`: 요청 본문을 구조체로 파싱
//!
//! 반환 타입이 `Result<T, AppError>`이면, Axum이 자동으로:
//! - `Ok(T)` → T를 HTTP 응답으로 변환 (IntoResponse 트레이트 사용)
//! - `Err(AppError)` → `{status:"fail", message}` 에러 응답으로 변환

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Path, State}, // Axum 추출자: URL 파라미터, 앱 상태 추출
    http::StatusCode,       // HTTP 상태 코드 (201 Created 등)
    Json,                   // JSON 요청/응답 처리
};
use serde_json::{json, Value}; // JSON 객체 생성용 매크로와 범용 JSON 타입
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{now_iso, BookPayload, BookSummary},
    services::{validate_book, BookAction, ValidationFailure},
    store::BookStore,
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 책 저장소는 프로세스 전역 변수가 아니라 이 구조체가 소유하며,
/// 테스트에서는 케이스마다 새 AppState를 만들어 격리합니다.
///
/// Tokio 런타임은 멀티스레드이므로 저장소는 Mutex 하나로 직렬화합니다.
/// 한 핸들러 호출이 잠금을 쥔 동안에는 다른 요청이 컬렉션을 건드릴 수
/// 없으므로, 부분 변경이 겹치는 일은 없습니다.
/// Arc: 여러 핸들러(스레드)가 같은 Mutex를 공유하기 위한 참조 카운트 포인터.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<BookStore>>,
}

impl AppState {
    /// 빈 저장소를 가진 상태를 만듭니다.
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(BookStore::new())),
        }
    }

    /// 저장소 잠금을 획득합니다.
    ///
    /// 다른 스레드가 잠금을 쥔 채 패닉하면 Mutex는 "poisoned" 상태가 되는데,
    /// 이 경우 핸들러를 패닉시키는 대신 500 응답(AppError::Internal)으로
    /// 변환합니다.
    pub fn books(&self) -> Result<MutexGuard<'_, BookStore>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// `POST /books` — 새 책을 추가합니다.
///
/// 1. 본문 검증 (실패 시 400, 저장소는 변경되지 않음)
/// 2. readPage ≤ pageCount 확인
/// 3. UUID 발급, insertedAt = updatedAt = 현재 시각, finished 계산
/// 4. 저장소 끝에 추가 후 201과 새 bookId 반환
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let draft = validate_book(&payload)
        .map_err(|failure| AppError::Validation(failure.message(BookAction::Create)))?;

    if draft.read_page > draft.page_count {
        return Err(AppError::Validation(
            ValidationFailure::ReadPageExceedsPageCount.message(BookAction::Create),
        ));
    }

    // UUIDv7: 시간 기반이라 생성 순서대로 정렬 가능한 고유 ID
    let id = Uuid::now_v7().to_string();
    let book = draft.into_book(id.clone(), now_iso());

    state.books()?.append(book);
    tracing::debug!("book {} added", id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Buku berhasil ditambahkan",
            "data": { "bookId": id }
        })),
    ))
}

/// `GET /books` — 전체 책 목록을 조회합니다.
///
/// 전체 레코드가 아니라 `{id, name, publisher}` 축약형(BookSummary)만
/// 삽입 순서대로 반환합니다. 검증할 것이 없으므로 실패하지 않습니다.
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let store = state.books()?;
    // .iter().map(BookSummary::from): 각 Book을 축약형으로 사상(projection)
    let books: Vec<BookSummary> = store.list().iter().map(BookSummary::from).collect();

    Ok(Json(json!({
        "status": "success",
        "data": { "books": books }
    })))
}

/// `GET /books/{bookId}` — 책 한 권의 전체 레코드를 조회합니다.
///
/// 해당 id가 없으면 404 "Buku tidak ditemukan"을 반환합니다.
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let store = state.books()?;
    let book = store
        .find_by_id(&book_id)
        // .ok_or_else(): Option이 None이면 지정한 에러를 반환합니다.
        .ok_or_else(|| AppError::NotFound("Buku tidak ditemukan".to_string()))?;

    Ok(Json(json!({
        "status": "success",
        "data": { "book": book }
    })))
}

/// `PUT /books/{bookId}` — 책 레코드를 교체합니다.
///
/// 검증 규칙은 생성과 동일하며 메시지 접두어만 다릅니다
/// ("Gagal memperbarui buku. ..."). 검증 실패(400)와 id 미존재(404)의
/// 어느 쪽이든 저장소는 변경되지 않습니다.
/// 교체 시 id와 insertedAt은 보존되고, finished는 다시 계산되며,
/// updatedAt은 현재 시각으로 갱신됩니다.
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> Result<Json<Value>, AppError> {
    let draft = validate_book(&payload)
        .map_err(|failure| AppError::Validation(failure.message(BookAction::Update)))?;

    if draft.read_page > draft.page_count {
        return Err(AppError::Validation(
            ValidationFailure::ReadPageExceedsPageCount.message(BookAction::Update),
        ));
    }

    // 잠금을 쥔 채 조회와 교체를 연속으로 수행하므로
    // 그 사이에 다른 요청이 끼어들 수 없습니다.
    let mut store = state.books()?;
    let original = store
        .find_by_id(&book_id)
        .cloned()
        .ok_or_else(|| {
            AppError::NotFound("Gagal memperbarui buku. Id tidak ditemukan".to_string())
        })?;

    let updated = draft.into_updated_book(&original, now_iso());
    store.replace_by_id(&book_id, updated);
    tracing::debug!("book {} updated", book_id);

    Ok(Json(json!({
        "status": "success",
        "message": "Buku berhasil diperbarui"
    })))
}

/// `DELETE /books/{bookId}` — 책을 삭제합니다.
///
/// 해당 id가 없으면 404를 반환합니다. 같은 id를 두 번 지우면
/// 첫 번째는 성공, 두 번째는 404가 됩니다.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let mut store = state.books()?;
    if !store.remove_by_id(&book_id) {
        return Err(AppError::NotFound(
            "Buku gagal dihapus. Id tidak ditemukan".to_string(),
        ));
    }
    tracing::debug!("book {} removed", book_id);

    Ok(Json(json!({
        "status": "success",
        "message": "Buku berhasil dihapus"
    })))
}
