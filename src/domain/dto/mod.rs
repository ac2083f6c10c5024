//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 요청/응답 타입입니다.

pub mod users;

// 공통 re-exports
pub use users::*;
