//! 인증 서비스 모듈
//!
//! - [`auth_service`] - 로컬 자격 증명 검사와 외부 로그인 완료
//! - [`oauth_provider`] - 외부 프로바이더 어댑터 (GitHub, Google, 미구현 스텁)
//! - [`session_service`] - 세션의 `user_id`, flash, OAuth `state` 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, FederatedProviders};
//!
//! let providers = FederatedProviders::from_settings(&settings.auth_providers)?;
//! let auth = AuthService::new(users.clone(), providers);
//! let outcome = auth.authenticate_local("barbara.gordon", "IAmBatgirl");
//! ```

pub mod auth_service;
pub mod oauth_provider;
pub mod session_service;

pub use auth_service::AuthService;
pub use oauth_provider::{FederatedProvider, FederatedProviders};
pub use session_service::SessionService;
