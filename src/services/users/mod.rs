//! 사용자 관리 서비스 모듈
//!
//! 프로세스 시작 시 레지스트리에 로컬 계정을 채워 넣는 작업을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::Users;
//! use crate::services::users::seed_users;
//!
//! let users = Users::new();
//! seed_users(&users)?;
//! assert_eq!(users.len(), 2);
//! ```

pub mod seed_service;

pub use seed_service::{seed_users, SeedAccount, SEED_ACCOUNTS};
