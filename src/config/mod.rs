//! # Configuration Module
//!
//! 서버 설정 관리를 담당하는 모듈입니다.
//! 설정값은 다음 순서로 겹쳐지며, 뒤의 계층이 앞의 계층을 덮어씁니다.
//!
//! 1. 내장 기본값 (`host = "0.0.0.0"`, `http_port = 8080`)
//! 2. TOML 파일 (`test-passport.toml` 또는 `--config` 경로)
//! 3. `TEST_PASSPORT__` 접두사 환경 변수 (`.env.<PROFILE>`에서 로드된 값 포함)
//! 4. 커맨드라인 플래그
//!
//! ## 모듈 구성
//!
//! - [`settings`] - 계층형 설정 로딩과 [`CliArgs`]
//! - [`auth_config`] - 인증 프로바이더 식별자와 프로바이더별 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use clap::Parser;
//! use crate::config::{CliArgs, Settings};
//!
//! let cli = CliArgs::parse();
//! let settings = Settings::load(&cli)?;
//! println!("Server will bind to {}", settings.bind_address());
//! ```
//!
//! ## 환경 변수 예시
//!
//! ```bash
//! export TEST_PASSPORT__SESSION_SECRET="keyboard cat"
//! export TEST_PASSPORT__HTTP_PORT="3000"
//! export TEST_PASSPORT__AUTH_PROVIDERS__GITHUB__CLIENT_ID="..."
//! export TEST_PASSPORT__AUTH_PROVIDERS__GITHUB__CLIENT_SECRET="..."
//! export TEST_PASSPORT__AUTH_PROVIDERS__GITHUB__CALLBACK_URL="http://localhost:3000/signin/github/callback"
//! ```

pub mod auth_config;
pub mod settings;

pub use auth_config::{AuthProvider, AuthProviders, OAuthProviderSettings, SamlSettings};
pub use settings::{CliArgs, Settings};
