//! # 인증 서비스
//!
//! 로컬 자격 증명 검사와 외부 프로바이더 로그인 완료를 담당합니다.
//! 두 경로 모두 [`AuthOutcome`]으로 끝나며, 세션 처리는 핸들러의 몫입니다.

use std::sync::Arc;
use crate::config::auth_config::AuthProvider;
use crate::domain::models::auth::AuthOutcome;
use crate::domain::models::oauth::RemoteProfile;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::Users;
use crate::services::auth::oauth_provider::{FederatedProvider, FederatedProviders};

/// 로컬 로그인 실패 시 보여주는 메시지
///
/// 사용자 존재 여부를 드러내지 않도록 두 경우 모두 같은 문구를 씁니다.
pub const INVALID_CREDENTIALS: &str = "invalid username or password";

/// 인증 서비스
pub struct AuthService {
    users: Arc<Users>,
    providers: FederatedProviders,
}

impl AuthService {
    pub fn new(users: Arc<Users>, providers: FederatedProviders) -> Self {
        Self { users, providers }
    }

    /// 로컬 사용자명/패스워드 인증
    ///
    /// 이름으로 사용자를 찾은 뒤 `password` 속성과 정확히 비교합니다.
    /// 불일치와 미존재는 에러가 아니라 [`AuthOutcome::Rejected`]입니다.
    pub fn authenticate_local(&self, username: &str, password: &str) -> AuthOutcome {
        let user = match self.users.lookup_by_name(username) {
            Some(user) => user,
            None => {
                log::info!("로컬 로그인 거부: 알 수 없는 사용자 {}", username);
                return AuthOutcome::rejected(INVALID_CREDENTIALS);
            }
        };

        if user.password() != Some(password) {
            log::info!("로컬 로그인 거부: 패스워드 불일치 {}", username);
            return AuthOutcome::rejected(INVALID_CREDENTIALS);
        }

        log::info!("로컬 로그인 성공: {}", user.id);
        AuthOutcome::Authenticated(user)
    }

    /// 검증된 원격 프로필을 레지스트리에 등록하고 결과를 돌려줍니다.
    ///
    /// 레지스트리 충돌은 그대로 [`AuthOutcome::Failed`]로 전달됩니다.
    pub fn complete_login(&self, provider: AuthProvider, profile: &RemoteProfile) -> AuthOutcome {
        let outcome = AuthOutcome::from(self.users.register(
            provider.as_str(),
            &profile.id,
            &profile.username,
        ));

        match &outcome {
            AuthOutcome::Authenticated(user) => log::info!("{} 로그인 성공: {}", provider, user.id),
            AuthOutcome::Failed(err) => log::error!("{} 로그인 실패: {}", provider, err),
            AuthOutcome::Rejected { message } => log::info!("{} 로그인 거부: {}", provider, message),
        }

        outcome
    }

    /// 프로바이더 인가 URL
    pub fn login_url(&self, provider: AuthProvider, state: &str) -> AppResult<String> {
        self.provider(provider)?.authorize_url(state)
    }

    /// 인가 코드로 프로필을 받아 로그인을 완료합니다.
    pub async fn complete_federated(&self, provider: AuthProvider, code: &str) -> AuthOutcome {
        let adapter = match self.provider(provider) {
            Ok(adapter) => adapter,
            Err(err) => return AuthOutcome::Failed(err),
        };

        match adapter.fetch_profile(code).await {
            Ok(profile) => self.complete_login(provider, &profile),
            Err(err) => {
                log::error!("{} 프로필 조회 실패: {}", provider, err);
                AuthOutcome::Failed(err)
            }
        }
    }

    /// 로그인 화면에 표시할 외부 프로바이더
    pub fn enabled_providers(&self) -> Vec<AuthProvider> {
        self.providers.enabled()
    }

    /// 설정 블록이 있는 외부 프로바이더인지 여부
    pub fn is_enabled(&self, provider: AuthProvider) -> bool {
        provider.is_federated() && self.providers.get(provider).is_some()
    }

    fn provider(&self, provider: AuthProvider) -> AppResult<Arc<dyn FederatedProvider>> {
        self.providers
            .get(provider)
            .ok_or_else(|| AppError::NotFound(format!("{} sign-in is not configured", provider)))
    }
}
