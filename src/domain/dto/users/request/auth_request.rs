//! 인증 요청관련 DTO
//!
//! 로그인 폼과 프로바이더 콜백에서 받은 값을 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로컬 로그인 폼 (`application/x-www-form-urlencoded`)
#[derive(Debug, Deserialize, Validate)]
pub struct LocalLoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    #[serde(default)]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    #[serde(default)]
    pub password: String,
}

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 사용자가 동의 화면에서 거부하면 `code` 대신 `error`가 옵니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[validate(length(min = 1, message = "authorization code is required"))]
    #[serde(default)]
    pub code: String,

    #[validate(length(min = 1, message = "state is required"))]
    #[serde(default)]
    pub state: String,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// SAML Assertion Consumer Service로 POST되는 폼
#[derive(Debug, Deserialize)]
pub struct SamlCallbackForm {
    #[serde(rename = "SAMLResponse", default)]
    pub saml_response: String,
}
