//! # Domain Models
//!
//! 엔티티가 아닌 도메인 모델들입니다.
//!
//! - [`auth`] - 인증 결과와 현재 사용자 추출자
//! - [`oauth`] - 외부 프로바이더 응답 모델

pub mod auth;
pub mod oauth;
