//! # Bookshelf API 라이브러리 루트
//!
//! 책 레코드를 프로세스 메모리에서 관리하는 작은 HTTP JSON API입니다.
//! 바이너리(main.rs)와 통합 테스트(tests/)가 같은 모듈을 쓸 수 있도록
//! 모듈 선언을 lib.rs에 둡니다.
//!
//! 계층 구조:
//! - `config`: 환경변수 기반 서버 설정
//! - `error`: AppError와 `{status:"fail"}` 응답 변환
//! - `models`: Book 레코드와 요청/응답 구조체
//! - `services`: 순수 검증 로직
//! - `store`: 인메모리 책 저장소
//! - `routes`: Axum 핸들러와 라우터 조립

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
