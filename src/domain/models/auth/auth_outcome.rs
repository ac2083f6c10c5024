//! 인증 시도의 결과 모델
//!
//! 인증 전략은 세 가지 중 하나로 끝납니다.
//!
//! | 변형 | 의미 | 처리 |
//! |------|------|------|
//! | `Authenticated` | 사용자 확인 완료 | 세션에 `user.id` 저장 |
//! | `Rejected` | 자격 증명 불일치 등 정상적인 거부 | flash 메시지 후 `/signin` |
//! | `Failed` | 충돌, 외부 서비스 오류 등 실제 실패 | 로그 기록 후 flash 메시지 |

use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};

/// 인증 전략 실행 결과
#[derive(Debug)]
pub enum AuthOutcome {
    /// 인증 성공
    Authenticated(User),
    /// 인증 거부 (에러가 아님)
    Rejected {
        /// 사용자에게 보여줄 메시지
        message: String,
    },
    /// 시스템 에러
    Failed(AppError),
}

impl AuthOutcome {
    /// 거부 결과 생성
    pub fn rejected(message: impl Into<String>) -> Self {
        AuthOutcome::Rejected {
            message: message.into(),
        }
    }

    /// 성공 여부
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthOutcome::Authenticated(_))
    }

    /// 성공 시 사용자
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthOutcome::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// 화면에 표시할 메시지
    ///
    /// 시스템 에러는 내부 정보를 노출하지 않도록 충돌 메시지만 그대로 보여줍니다.
    pub fn flash_message(&self) -> Option<String> {
        match self {
            AuthOutcome::Authenticated(_) => None,
            AuthOutcome::Rejected { message } => Some(message.clone()),
            AuthOutcome::Failed(AppError::ConflictError(msg)) => Some(msg.clone()),
            AuthOutcome::Failed(AppError::NotImplemented(msg)) => Some(msg.clone()),
            AuthOutcome::Failed(_) => Some("authentication failed".to_string()),
        }
    }
}

impl From<AppResult<User>> for AuthOutcome {
    fn from(result: AppResult<User>) -> Self {
        match result {
            Ok(user) => AuthOutcome::Authenticated(user),
            Err(err) => AuthOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ok_result_is_authenticated() {
        let outcome = AuthOutcome::from(Ok(User::new("github:42".to_string(), "robin".to_string())));

        assert!(outcome.is_authenticated());
        assert_eq!(outcome.user().map(|u| u.name.as_str()), Some("robin"));
        assert_eq!(outcome.flash_message(), None);
    }

    #[test]
    fn test_rejected_is_not_an_error() {
        let outcome = AuthOutcome::rejected("invalid username or password");

        assert_eq!(outcome.flash_message().as_deref(), Some("invalid username or password"));
        assert!(!outcome.is_authenticated());
        assert!(outcome.user().is_none());
    }

    #[test]
    fn test_conflict_message_is_shown() {
        let outcome = AuthOutcome::from(Err(AppError::ConflictError(
            "name conflict nightwing != robin".to_string(),
        )));

        assert_eq!(outcome.flash_message().as_deref(), Some("name conflict nightwing != robin"));
        assert!(matches!(outcome, AuthOutcome::Failed(AppError::ConflictError(_))));
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let outcome = AuthOutcome::Failed(AppError::ExternalServiceError(
            "token endpoint returned 500: secret-ish body".to_string(),
        ));

        assert_eq!(outcome.flash_message().as_deref(), Some("authentication failed"));
    }
}
