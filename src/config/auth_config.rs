//! 인증 관련 설정 관리 모듈
//!
//! 지원하는 인증 프로바이더의 식별자와, 외부 프로바이더별 OAuth/SAML 설정을 정의합니다.
//! 프로바이더 설정 블록이 없으면 해당 프로바이더의 로그인 경로도 노출되지 않습니다.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::errors::AppError;

/// OAuth 2.0 프로바이더 설정
///
/// `authorization_url`, `token_url`, `profile_url`, `scope`를 생략하면
/// 프로바이더별 기본 엔드포인트가 사용됩니다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OAuthProviderSettings {
    pub client_id: String,
    pub client_secret: String,
    /// 프로바이더에 등록된 리디렉션 URI
    pub callback_url: String,
    #[serde(default)]
    pub authorization_url: Option<String>,
    #[serde(default)]
    pub token_url: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// SAML 서비스 프로바이더 설정
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SamlSettings {
    /// IdP SSO 진입점
    pub entry_point: String,
    pub issuer: String,
    /// Assertion Consumer Service URL
    pub callback_url: String,
}

/// `auth_providers` 설정 블록
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthProviders {
    #[serde(default)]
    pub github: Option<OAuthProviderSettings>,
    #[serde(default)]
    pub google: Option<OAuthProviderSettings>,
    #[serde(default)]
    pub facebook: Option<OAuthProviderSettings>,
    #[serde(default)]
    pub saml: Option<SamlSettings>,
}

/// 지원되는 인증 프로바이더 열거형
///
/// 문자열 표현은 사용자 `id`의 접두사(`"github:42"`)와 URL 경로
/// (`/signin/github`)에 그대로 쓰입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 사용자명/패스워드 인증
    Local,
    /// GitHub OAuth 2.0
    GitHub,
    /// Google OAuth 2.0
    Google,
    /// Facebook OAuth 2.0 (미구현)
    Facebook,
    /// SAML 2.0 (미구현)
    Saml,
}

impl AuthProvider {
    /// 소문자 문자열 표현
    ///
    /// ```rust,ignore
    /// assert_eq!(AuthProvider::GitHub.as_str(), "github");
    /// log::info!("User authenticated via: {}", provider.as_str());
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::GitHub => "github",
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
            AuthProvider::Saml => "saml",
        }
    }

    /// 로그인 화면에 표시할 이름
    pub fn display_name(&self) -> &'static str {
        match self {
            AuthProvider::Local => "Local",
            AuthProvider::GitHub => "GitHub",
            AuthProvider::Google => "Google",
            AuthProvider::Facebook => "Facebook",
            AuthProvider::Saml => "SAML",
        }
    }

    /// 외부 프로바이더로 위임되는 로그인인지 여부
    pub fn is_federated(&self) -> bool {
        !matches!(self, AuthProvider::Local)
    }
}

impl FromStr for AuthProvider {
    type Err = AppError;

    /// 대소문자를 구분하지 않고 프로바이더 이름을 해석합니다.
    ///
    /// 알 수 없는 이름은 `NotFound`이며, 경로 파라미터로 들어온 경우 404가 됩니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "github" => Ok(AuthProvider::GitHub),
            "google" => Ok(AuthProvider::Google),
            "facebook" => Ok(AuthProvider::Facebook),
            "saml" => Ok(AuthProvider::Saml),
            _ => Err(AppError::NotFound(format!("Unsupported auth provider: {}", s))),
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!("local".parse::<AuthProvider>().unwrap(), AuthProvider::Local);
        assert_eq!("github".parse::<AuthProvider>().unwrap(), AuthProvider::GitHub);
        assert_eq!("saml".parse::<AuthProvider>().unwrap(), AuthProvider::Saml);

        // 대소문자 무관
        assert_eq!("GitHub".parse::<AuthProvider>().unwrap(), AuthProvider::GitHub);

        assert!(matches!(
            "twitter".parse::<AuthProvider>(),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_display_matches_id_prefix() {
        let providers = [
            AuthProvider::Local,
            AuthProvider::GitHub,
            AuthProvider::Google,
            AuthProvider::Facebook,
            AuthProvider::Saml,
        ];

        for provider in providers {
            assert_eq!(provider.to_string(), provider.as_str());
            assert_eq!(provider.as_str().parse::<AuthProvider>().unwrap(), provider);
        }
        assert!(!AuthProvider::Local.is_federated());
        assert!(AuthProvider::Saml.is_federated());
    }

    #[test]
    fn test_auth_provider_serialization() {
        let json = serde_json::to_string(&AuthProvider::GitHub).unwrap();
        assert_eq!(json, "\"github\"");
    }
}
