//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 명시적으로 생성되어 `web::Data`로 공유됩니다.
//!
//! # Features
//!
//! - 로컬 자격 증명 인증
//! - OAuth 2.0 소셜 로그인 (GitHub, Google)
//! - 세션 상태 관리 (로그인 사용자, flash 메시지, OAuth state)
//! - 시작 시 로컬 계정 등록
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let outcome = auth_service.authenticate_local("bruce.wayne", "IAmBatman");
//! ```

pub mod users;
pub mod auth;
