//! # 사용자 관련 응답 DTO 모듈
//!
//! JSON API 응답에 쓰이는 DTO입니다. 민감한 속성은 여기서 걸러집니다.

pub mod user_response;

pub use user_response::UserResponse;
