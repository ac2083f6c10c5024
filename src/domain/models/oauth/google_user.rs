//! # Google OAuth 사용자 정보 모델
//!
//! Google OAuth2 UserInfo 엔드포인트의 응답을 매핑합니다.
//! v2 엔드포인트는 `id`, OpenID Connect 엔드포인트는 `sub`를 돌려주므로
//! 둘 다 받아들입니다.

use serde::Deserialize;
use super::remote_profile::RemoteProfile;
use crate::errors::errors::AppError;

/// Google UserInfo 응답
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// v2 `userinfo`의 사용자 ID
    pub id: Option<String>,
    /// OpenID Connect `userinfo`의 사용자 ID
    pub sub: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

impl GoogleUserInfo {
    /// 레지스트리에 쓸 사용자명
    ///
    /// Google은 별도 사용자명이 없으므로 이메일의 로컬 파트를 쓰고,
    /// 이메일이 없으면 표시 이름을 씁니다.
    pub fn username(&self) -> Option<String> {
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .map(str::to_string)
            .or_else(|| self.name.clone())
    }
}

impl TryFrom<GoogleUserInfo> for RemoteProfile {
    type Error = AppError;

    fn try_from(info: GoogleUserInfo) -> Result<Self, Self::Error> {
        let username = info.username().ok_or_else(|| {
            AppError::ExternalServiceError("Google 프로필에 사용자명이 없습니다".to_string())
        })?;
        let id = info.id.or(info.sub).ok_or_else(|| {
            AppError::ExternalServiceError("Google 프로필에 사용자 ID가 없습니다".to_string())
        })?;

        Ok(RemoteProfile::new(id, username))
    }
}
