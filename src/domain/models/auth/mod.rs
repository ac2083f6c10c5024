//! 인증 관련 도메인 모델
//!
//! - [`auth_outcome`] - 인증 전략의 세 갈래 결과
//! - [`authenticated_user`] - 요청 단위 현재 사용자 추출자

pub mod auth_outcome;
pub mod authenticated_user;

pub use auth_outcome::AuthOutcome;
pub use authenticated_user::AuthenticatedUser;
