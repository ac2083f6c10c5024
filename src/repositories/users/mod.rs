//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`Users`](user_registry::Users)는 프로세스 메모리에만 존재하는 신원 레지스트리입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::Users;
//!
//! let users = Users::new();
//! let user = users.lookup_by_name("barbara.gordon");
//! ```

pub mod user_registry;

pub use user_registry::Users;
