//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 담당합니다.
//!
//! # 제공 미들웨어
//!
//! ### 로그인 가드 (AuthMiddleware)
//! - 세션의 `user_id`로 현재 사용자 복원
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 모드 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(web::scope("/signin").service(/* 로그인 라우트 */))
//!     .service(
//!         web::scope("")
//!             .wrap(AuthMiddleware)
//!             .service(/* 보호된 라우트 */)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::{AuthMiddleware, SIGNIN_PATH};
