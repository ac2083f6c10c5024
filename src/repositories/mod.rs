//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 영속 저장소 없이 프로세스 메모리에만 데이터를 보관합니다.
//! 리포지토리는 `main`에서 명시적으로 생성되어 `web::Data`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::repositories::users::Users;
//!
//! let users = web::Data::new(Users::new());
//! App::new().app_data(users.clone());
//! ```

pub mod users;
