//! Authentication HTTP Handlers
//!
//! 로그인 화면과 각 로그인 방식의 진입점/콜백을 처리합니다.
//! 모든 로그인 시도는 세션에 `user_id`를 저장하고 `/`로 가거나,
//! flash 메시지를 남기고 `/signin`으로 돌아갑니다.
//!
//! # Routes
//!
//! - `GET /signin` - 로그인 폼
//! - `POST /signin/local` - 사용자명/패스워드 로그인
//! - `GET /signin/{provider}` - 외부 프로바이더로 리디렉션
//! - `GET /signin/{provider}/callback` - OAuth 콜백
//! - `POST /signin/saml/callback` - SAML Assertion Consumer Service
//! - `GET /signout` - 로그아웃

use actix_session::Session;
use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::config::auth_config::AuthProvider;
use crate::domain::dto::{LocalLoginRequest, OAuthCallbackQuery, SamlCallbackForm};
use crate::domain::models::auth::AuthOutcome;
use crate::errors::errors::{AppError, AppResult};
use crate::middlewares::SIGNIN_PATH;
use crate::services::auth::auth_service::INVALID_CREDENTIALS;
use crate::services::auth::{AuthService, SessionService};
use crate::utils::html_utils::signin_page;

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 인증 결과를 세션에 반영하고 리디렉션 응답을 만듭니다.
fn finish_signin(session: &Session, outcome: AuthOutcome) -> AppResult<HttpResponse> {
    match outcome {
        AuthOutcome::Authenticated(user) => {
            SessionService::login(session, &user)?;
            Ok(redirect("/"))
        }
        outcome => {
            if let Some(message) = outcome.flash_message() {
                SessionService::set_flash(session, &message)?;
            }
            Ok(redirect(SIGNIN_PATH))
        }
    }
}

/// 경로의 프로바이더 이름을 설정된 외부 프로바이더로 해석합니다.
///
/// 알 수 없거나 설정되지 않은 프로바이더는 404입니다.
fn federated_provider(auth: &AuthService, name: &str) -> AppResult<AuthProvider> {
    let provider: AuthProvider = name.parse()?;
    if !auth.is_enabled(provider) {
        return Err(AppError::NotFound(format!("{} sign-in is not configured", name)));
    }
    Ok(provider)
}

/// 로그인 폼
///
/// 대기 중인 flash 메시지는 여기서 한 번 표시되고 사라집니다.
#[get("/signin")]
pub async fn signin_form(session: Session, auth: web::Data<AuthService>) -> HttpResponse {
    let flash = SessionService::take_flash(&session);

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(signin_page(flash.as_deref(), &auth.enabled_providers()))
}

/// 로컬 로그인
///
/// # Form
///
/// ```text
/// username=barbara.gordon&password=IAmBatgirl
/// ```
#[post("/signin/local")]
pub async fn local_signin(
    session: Session,
    auth: web::Data<AuthService>,
    form: web::Form<LocalLoginRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = match form.validate() {
        Ok(()) => auth.authenticate_local(&form.username, &form.password),
        Err(e) => {
            log::info!("로컬 로그인 폼 검증 실패: {}", e);
            AuthOutcome::rejected(INVALID_CREDENTIALS)
        }
    };

    finish_signin(&session, outcome)
}

/// 외부 프로바이더 인가 URL로 리디렉션합니다.
///
/// `state`는 인가 URL을 만들 수 있을 때만 세션에 남습니다.
#[get("/signin/{provider}")]
pub async fn provider_signin(
    session: Session,
    auth: web::Data<AuthService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let provider = federated_provider(&auth, &path)?;
    let state = SessionService::new_oauth_state();

    match auth.login_url(provider, &state) {
        Ok(url) => {
            SessionService::remember_oauth_state(&session, &state)?;
            Ok(redirect(&url))
        }
        Err(err) => {
            log::error!("{} 로그인 시작 실패: {}", provider, err);
            finish_signin(&session, AuthOutcome::Failed(err))
        }
    }
}

/// OAuth 2.0 콜백
///
/// `state`를 검증한 뒤 인가 코드로 프로필을 받아 레지스트리에 등록합니다.
/// 사용자가 동의를 거부한 경우(`error` 파라미터)는 거부로 처리됩니다.
#[get("/signin/{provider}/callback")]
pub async fn provider_callback(
    session: Session,
    auth: web::Data<AuthService>,
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let provider = federated_provider(&auth, &path)?;

    if let Some(error) = &query.error {
        let message = query
            .error_description
            .clone()
            .unwrap_or_else(|| format!("{} sign-in was cancelled", provider));
        log::warn!("{} OAuth 에러: {} - {}", provider, error, message);
        return finish_signin(&session, AuthOutcome::rejected(message));
    }

    if let Err(err) = SessionService::verify_oauth_state(&session, &query.state) {
        log::warn!("{} 콜백 state 검증 실패", provider);
        return finish_signin(&session, AuthOutcome::Failed(err));
    }

    if let Err(e) = query.validate() {
        log::warn!("{} 콜백 파라미터 오류: {}", provider, e);
        return finish_signin(&session, AuthOutcome::rejected("authorization code is missing"));
    }

    let outcome = auth.complete_federated(provider, &query.code).await;
    finish_signin(&session, outcome)
}

/// SAML Assertion Consumer Service
#[post("/signin/saml/callback")]
pub async fn saml_callback(
    session: Session,
    auth: web::Data<AuthService>,
    form: web::Form<SamlCallbackForm>,
) -> Result<HttpResponse, AppError> {
    let provider = federated_provider(&auth, AuthProvider::Saml.as_str())?;

    log::debug!("SAML 응답 수신 ({} bytes)", form.saml_response.len());
    let outcome = auth.complete_federated(provider, &form.saml_response).await;
    finish_signin(&session, outcome)
}

/// 로그아웃
#[get("/signout")]
pub async fn signout(session: Session) -> HttpResponse {
    SessionService::logout(&session);
    redirect("/")
}
