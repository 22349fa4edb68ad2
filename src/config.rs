//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `PORT`: 서버 포트 번호 (선택, 기본값 9000)
//!
//! 호스트 주소는 설정 대상이 아닙니다. 이 API는 로컬에서만 접근하는
//! 단일 프로세스 서비스이므로 `localhost`로 고정되어 있습니다.

// std::env: Rust 표준 라이브러리의 환경변수 모듈
use std::env;

// #[derive(...)]: 자동으로 트레이트 구현을 생성하는 **derive 매크로**
// - Debug: {:?} 포맷으로 출력 가능 (디버깅용 문자열 표현)
// - Clone: .clone() 메서드로 값을 복제 가능
#[derive(Debug, Clone)]
/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// 애플리케이션 전체에서 공유됩니다.
pub struct Config {
    /// 서버가 바인딩할 호스트 주소 (고정값: "localhost")
    pub host: String,
    /// 서버 포트 번호 (기본값: 9000)
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 필수 환경변수는 없습니다. `PORT`가 없거나 숫자로 파싱할 수 없으면
    /// 기본값 9000을 사용하므로 이 함수는 실패하지 않습니다.
    pub fn from_env() -> Self {
        Self {
            host: "localhost".to_string(),

            // 포트 번호는 문자열 → 숫자 변환이 필요합니다.
            // .parse(): 문자열을 다른 타입으로 파싱. 여기서는 u16으로 변환합니다.
            // .unwrap_or(9000): 환경변수가 없거나 파싱 실패 시 기본값 9000 사용
            port: env::var("PORT")
                .unwrap_or_else(|_| "9000".to_string())
                .parse()
                .unwrap_or(9000),
        }
    }
}
