//! # 저장소 계층 (In-Memory Store)
//!
//! 책 레코드를 프로세스 메모리에 보관하는 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈을 통해 레코드를 읽고 씁니다.
//!
//! 영속성은 없습니다. 컬렉션은 프로세스 시작 시 비어 있는 상태로
//! 만들어지고, 프로세스가 종료되면 함께 사라집니다.

pub mod books;

pub use books::*;
