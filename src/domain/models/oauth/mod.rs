//! # OAuth Domain Models Module
//!
//! 외부 프로바이더 응답을 매핑하는 모델과, 이를 정규화한
//! [`RemoteProfile`](remote_profile::RemoteProfile)을 정의합니다.
//!
//! ```text
//! oauth/
//! ├── mod.rs
//! ├── remote_profile.rs   ← 레지스트리로 전달되는 공통 프로필
//! ├── oauth_token.rs      ← 토큰 교환 응답
//! ├── github_user.rs      ← GitHub /user 응답
//! └── google_user.rs      ← Google userinfo 응답
//! ```

pub mod remote_profile;
pub mod oauth_token;
pub mod github_user;
pub mod google_user;

pub use remote_profile::RemoteProfile;
pub use oauth_token::OAuthTokenResponse;
pub use github_user::GitHubUserInfo;
pub use google_user::GoogleUserInfo;
