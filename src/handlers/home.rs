//! 로그인 사용자 화면과 JSON API

use actix_web::{get, web, HttpResponse};
use crate::domain::dto::UserResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::{AppError, AppResult, ErrorContext};
use crate::utils::html_utils::home_page;

/// 메인 화면: 현재 사용자 레코드를 보기 좋게 출력합니다.
#[get("/")]
pub async fn index(user: AuthenticatedUser) -> AppResult<HttpResponse> {
    let json = serde_json::to_string_pretty(user.user()).context("사용자 직렬화 실패")?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(home_page(&json)))
}

/// `GET /api/v1/me`
#[get("/api/v1/me")]
pub async fn me(user: AuthenticatedUser) -> Result<web::Json<UserResponse>, AppError> {
    Ok(web::Json(UserResponse::from(user.into_inner())))
}
