//! # 서비스 계층 (비즈니스 로직)
//!
//! HTTP나 저장소와 무관한 순수 로직을 모아둔 모듈입니다.
//! - `validation`: 책 요청 본문 검증 규칙

pub mod validation;

pub use validation::*;
