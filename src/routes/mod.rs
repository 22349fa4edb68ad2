//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `books`: 책 CRUD 핸들러와 애플리케이션 상태(AppState)
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod books;
pub mod health;

// 각 모듈의 핸들러 함수들을 재공개하여
// `routes::list_books`처럼 바로 접근 가능하게 합니다.
pub use books::*;
pub use health::*;

use axum::{
    routing::get, // HTTP 메서드별 라우팅 함수
    Router,       // 라우터: URL 경로와 핸들러를 연결하는 구조체
};

/// API 라우터를 조립합니다.
///
/// main.rs와 통합 테스트가 같은 함수를 사용합니다. 테스트는 실제 포트에
/// 바인딩하지 않고 이 라우터에 요청을 직접 흘려보냅니다.
///
/// `.route()`에 같은 경로를 두고 `.get().post()`처럼 체이닝하면
/// 하나의 경로에 여러 HTTP 메서드를 매핑할 수 있습니다.
/// `{bookId}`는 URL 경로 파라미터로, 핸들러에서 `Path<String>`으로 추출합니다.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{bookId}",
            get(get_book).put(update_book).delete(delete_book),
        )
        // 헬스체크 API (서버 상태 확인용)
        .route("/health", get(health_check))
        // .with_state(): 이 라우터의 모든 핸들러에서 AppState를 사용할 수 있게 합니다.
        .with_state(state)
}
