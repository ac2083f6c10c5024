//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let id = User::qualified_id("github", "42");
//! let user = User::new(id, "robin".to_string());
//! ```

pub mod user;

pub use user::User;
