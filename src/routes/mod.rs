//! 라우트 설정 모듈
//!
//! 로그인 관련 경로와 헬스체크는 공개되고, 나머지 모든 경로는
//! [`AuthMiddleware`] 가드 뒤에 놓입니다.
//!
//! ```text
//! /health                       공개
//! /signin, /signin/*            공개
//! /, /api/v1/me, /signout       로그인 필요
//! /* (static_files_dir)         로그인 필요
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! App::new().configure(|cfg| configure_all_routes(cfg, settings.static_files_dir.as_deref()));
//! ```

use std::path::Path;
use actix_files::Files;
use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::repositories::users::Users;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig, static_files_dir: Option<&Path>) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);

    // 가드 스코프는 모든 경로를 받으므로 마지막에 등록
    configure_protected_routes(cfg, static_files_dir);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::signin_form)
        .service(handlers::auth::local_signin)
        .service(handlers::auth::saml_callback)
        .service(handlers::auth::provider_callback)
        .service(handlers::auth::provider_signin);
}

fn configure_protected_routes(cfg: &mut web::ServiceConfig, static_files_dir: Option<&Path>) {
    let mut scope = web::scope("")
        .wrap(AuthMiddleware)
        .service(handlers::home::index)
        .service(handlers::home::me)
        .service(handlers::auth::signout);

    if let Some(dir) = static_files_dir {
        log::info!("정적 파일 제공: {}", dir.display());
        scope = scope.service(Files::new("/", dir));
    }

    cfg.service(scope);
}

/// Health check endpoint
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "test_passport",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "users": 2
/// }
/// ```
#[get("/health")]
async fn health_check(users: web::Data<Users>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "users": users.len()
    }))
}
