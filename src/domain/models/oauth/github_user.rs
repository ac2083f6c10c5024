//! # GitHub 사용자 정보 모델
//!
//! `GET https://api.github.com/user` 응답 중 로그인에 필요한 필드만 매핑합니다.

use serde::Deserialize;
use super::remote_profile::RemoteProfile;

/// GitHub REST API 사용자 응답
///
/// | 필드 | 설명 |
/// |------|------|
/// | `id` | 변하지 않는 숫자 ID |
/// | `login` | 사용자명 (변경 가능) |
/// | `name` | 표시 이름 (비공개일 수 있음) |
/// | `email` | 공개 이메일 (비공개일 수 있음) |
#[derive(Debug, Deserialize)]
pub struct GitHubUserInfo {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<GitHubUserInfo> for RemoteProfile {
    fn from(info: GitHubUserInfo) -> Self {
        RemoteProfile::new(info.id.to_string(), info.login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_user_maps_login_to_username() {
        let body = r#"{"id":42,"login":"robin","name":null,"email":null,"site_admin":false}"#;
        let info: GitHubUserInfo = serde_json::from_str(body).unwrap();

        assert_eq!(RemoteProfile::from(info), RemoteProfile::new("42", "robin"));
    }
}
