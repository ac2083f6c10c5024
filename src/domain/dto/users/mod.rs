//! # Users DTO Module
//!
//! 인증 요청 폼/쿼리와 사용자 응답 DTO를 묶습니다.

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
