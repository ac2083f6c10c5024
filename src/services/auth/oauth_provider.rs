//! # 외부 로그인 프로바이더
//!
//! 각 프로바이더는 [`FederatedProvider`] 트레이트 뒤에 숨겨지며, 인증 서비스는
//! 검증된 원격 프로필([`RemoteProfile`])만 받아서 레지스트리에 등록합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! Browser            test-passport                 Provider
//!    │  GET /signin/github  │                           │
//!    │─────────────────────►│ state 생성, 세션 저장       │
//!    │◄─────── 302 ─────────│ authorize_url(state)      │
//!    │──────────────────────────────────────────────────►│ 사용자 동의
//!    │◄──────────────── 302 callback?code&state ─────────│
//!    │  GET /callback       │                           │
//!    │─────────────────────►│ state 검증                 │
//!    │                      │── POST token_url ────────►│
//!    │                      │◄──── access_token ────────│
//!    │                      │── GET profile_url ───────►│
//!    │                      │◄──── profile JSON ────────│
//!    │◄─────── 302 / ───────│ register(provider, id, username)
//! ```
//!
//! Facebook과 SAML은 설정만 받아들이고 모든 로그인 시도를 `NotImplemented`로 실패시킵니다.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use crate::config::auth_config::{AuthProvider, AuthProviders, OAuthProviderSettings};
use crate::domain::models::oauth::{GitHubUserInfo, GoogleUserInfo, OAuthTokenResponse, RemoteProfile};
use crate::errors::errors::{AppError, AppResult};

const USER_AGENT: &str = concat!("test-passport/", env!("CARGO_PKG_VERSION"));

/// 외부 로그인 프로바이더 어댑터
#[async_trait]
pub trait FederatedProvider: Send + Sync {
    /// 사용자 `id` 접두사로 쓰이는 프로바이더 식별자
    fn provider(&self) -> AuthProvider;

    /// 사용자를 보낼 인가 URL
    fn authorize_url(&self, state: &str) -> AppResult<String>;

    /// 콜백으로 받은 인가 코드를 검증된 원격 프로필로 바꿉니다.
    async fn fetch_profile(&self, code: &str) -> AppResult<RemoteProfile>;
}

/// 프로바이더별 기본 엔드포인트
#[derive(Debug, Clone, Copy)]
pub struct OAuthDefaults {
    pub authorization_url: &'static str,
    pub token_url: &'static str,
    pub profile_url: &'static str,
    pub scope: &'static str,
}

pub const GITHUB_DEFAULTS: OAuthDefaults = OAuthDefaults {
    authorization_url: "https://github.com/login/oauth/authorize",
    token_url: "https://github.com/login/oauth/access_token",
    profile_url: "https://api.github.com/user",
    scope: "user:email",
};

pub const GOOGLE_DEFAULTS: OAuthDefaults = OAuthDefaults {
    authorization_url: "https://accounts.google.com/o/oauth2/v2/auth",
    token_url: "https://oauth2.googleapis.com/token",
    profile_url: "https://www.googleapis.com/oauth2/v2/userinfo",
    scope: "openid email profile",
};

/// 인가 코드 교환과 프로필 조회를 담당하는 OAuth 2.0 클라이언트
#[derive(Debug, Clone)]
pub struct OAuthClient {
    provider: AuthProvider,
    client_id: String,
    client_secret: String,
    callback_url: String,
    authorization_url: String,
    token_url: String,
    profile_url: String,
    scope: String,
    http: reqwest::Client,
}

impl OAuthClient {
    /// 설정값이 비어 있는 엔드포인트는 `defaults`로 채웁니다.
    pub fn new(
        provider: AuthProvider,
        settings: &OAuthProviderSettings,
        defaults: OAuthDefaults,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        let pick = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            provider,
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            callback_url: settings.callback_url.clone(),
            authorization_url: pick(&settings.authorization_url, defaults.authorization_url),
            token_url: pick(&settings.token_url, defaults.token_url),
            profile_url: pick(&settings.profile_url, defaults.profile_url),
            scope: pick(&settings.scope, defaults.scope),
            http,
        })
    }

    /// `state`를 포함한 인가 URL을 생성합니다.
    pub fn authorize_url(&self, state: &str) -> String {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.callback_url.as_str()),
            ("scope", self.scope.as_str()),
            ("response_type", "code"),
            ("state", state),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.authorization_url, query_string)
    }

    /// 인가 코드를 액세스 토큰으로 교환합니다.
    pub async fn exchange_code_for_token(&self, code: &str) -> AppResult<OAuthTokenResponse> {
        let params = [
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.callback_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        // GitHub은 Accept 헤더가 없으면 form-urlencoded로 응답한다
        let response = self
            .http
            .post(&self.token_url)
            .header(ACCEPT, "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("{} 토큰 요청 실패: {}", self.provider, e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 토큰 교환 실패 ({}): {}",
                self.provider, status, error_text
            )));
        }

        response.json::<OAuthTokenResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("{} 토큰 응답 파싱 실패: {}", self.provider, e))
        })
    }

    /// 액세스 토큰으로 프로필 엔드포인트를 조회합니다.
    pub async fn get_user_info<T: DeserializeOwned>(&self, access_token: &str) -> AppResult<T> {
        let response = self
            .http
            .get(&self.profile_url)
            .bearer_auth(access_token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "{} 사용자 정보 요청 실패: {}",
                    self.provider, e
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 사용자 정보 조회 실패 ({}): {}",
                self.provider, status, error_text
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::ExternalServiceError(format!(
                "{} 사용자 정보 파싱 실패: {}",
                self.provider, e
            ))
        })
    }
}

/// GitHub OAuth 2.0
pub struct GitHubProvider {
    client: OAuthClient,
}

impl GitHubProvider {
    pub fn new(settings: &OAuthProviderSettings) -> AppResult<Self> {
        Ok(Self {
            client: OAuthClient::new(AuthProvider::GitHub, settings, GITHUB_DEFAULTS)?,
        })
    }
}

#[async_trait]
impl FederatedProvider for GitHubProvider {
    fn provider(&self) -> AuthProvider {
        AuthProvider::GitHub
    }

    fn authorize_url(&self, state: &str) -> AppResult<String> {
        Ok(self.client.authorize_url(state))
    }

    async fn fetch_profile(&self, code: &str) -> AppResult<RemoteProfile> {
        let token = self.client.exchange_code_for_token(code).await?;
        let info: GitHubUserInfo = self.client.get_user_info(&token.access_token).await?;
        Ok(info.into())
    }
}

/// Google OAuth 2.0
pub struct GoogleProvider {
    client: OAuthClient,
}

impl GoogleProvider {
    pub fn new(settings: &OAuthProviderSettings) -> AppResult<Self> {
        Ok(Self {
            client: OAuthClient::new(AuthProvider::Google, settings, GOOGLE_DEFAULTS)?,
        })
    }
}

#[async_trait]
impl FederatedProvider for GoogleProvider {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    fn authorize_url(&self, state: &str) -> AppResult<String> {
        Ok(self.client.authorize_url(state))
    }

    async fn fetch_profile(&self, code: &str) -> AppResult<RemoteProfile> {
        let token = self.client.exchange_code_for_token(code).await?;
        let info: GoogleUserInfo = self.client.get_user_info(&token.access_token).await?;
        RemoteProfile::try_from(info)
    }
}

/// 설정은 있지만 로그인 흐름이 구현되지 않은 프로바이더 (Facebook, SAML)
pub struct NotImplementedProvider {
    provider: AuthProvider,
}

impl NotImplementedProvider {
    pub fn new(provider: AuthProvider) -> Self {
        Self { provider }
    }

    fn error(&self) -> AppError {
        AppError::NotImplemented(format!("{} sign-in is not implemented", self.provider))
    }
}

#[async_trait]
impl FederatedProvider for NotImplementedProvider {
    fn provider(&self) -> AuthProvider {
        self.provider
    }

    fn authorize_url(&self, _state: &str) -> AppResult<String> {
        Err(self.error())
    }

    async fn fetch_profile(&self, _code: &str) -> AppResult<RemoteProfile> {
        Err(self.error())
    }
}

/// 활성화된 외부 프로바이더 목록
///
/// 설정 블록이 있는 프로바이더만 포함됩니다.
#[derive(Clone, Default)]
pub struct FederatedProviders {
    providers: HashMap<AuthProvider, Arc<dyn FederatedProvider>>,
}

impl FederatedProviders {
    /// 빈 목록
    pub fn new() -> Self {
        Self::default()
    }

    /// `auth_providers` 설정에서 프로바이더 어댑터를 생성합니다.
    pub fn from_settings(settings: &AuthProviders) -> AppResult<Self> {
        let mut providers = Self::new();

        if let Some(github) = &settings.github {
            providers = providers.with(Arc::new(GitHubProvider::new(github)?));
        }
        if let Some(google) = &settings.google {
            providers = providers.with(Arc::new(GoogleProvider::new(google)?));
        }
        if settings.facebook.is_some() {
            providers = providers.with(Arc::new(NotImplementedProvider::new(AuthProvider::Facebook)));
        }
        if settings.saml.is_some() {
            providers = providers.with(Arc::new(NotImplementedProvider::new(AuthProvider::Saml)));
        }

        Ok(providers)
    }

    /// 프로바이더를 추가합니다. 같은 식별자가 있으면 교체됩니다.
    pub fn with(mut self, provider: Arc<dyn FederatedProvider>) -> Self {
        self.providers.insert(provider.provider(), provider);
        self
    }

    pub fn get(&self, provider: AuthProvider) -> Option<Arc<dyn FederatedProvider>> {
        self.providers.get(&provider).cloned()
    }

    /// 로그인 화면에 표시할 순서로 정렬된 프로바이더 식별자
    pub fn enabled(&self) -> Vec<AuthProvider> {
        [
            AuthProvider::GitHub,
            AuthProvider::Google,
            AuthProvider::Facebook,
            AuthProvider::Saml,
        ]
        .into_iter()
        .filter(|p| self.providers.contains_key(p))
        .collect()
    }
}
