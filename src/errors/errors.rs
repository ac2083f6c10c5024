//! 서버 전역 에러 타입
//!
//! 모든 계층이 [`AppError`] 하나로 실패를 전달하고, 핸들러에서 반환되면
//! `ResponseError` 구현이 상태 코드와 JSON 본문을 정합니다.
//!
//! 인증 실패(잘못된 비밀번호, 알 수 없는 사용자)는 이 타입으로 표현하지 않습니다.
//! 그것은 [`AuthOutcome::Rejected`](crate::domain::models::auth::auth_outcome::AuthOutcome)
//! 로 전달되는 "정상적인 부정 결과"이며, 여기의 변형들은 실제 실패만 나타냅니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! let user = users.register("github", "42", "robin")?;
//! let user = users.lookup_by_id(&id)
//!     .ok_or_else(|| AppError::NotFound(format!("user {} not found", id)))?;
//! ```

use thiserror::Error;

/// 서버 전역 에러
///
/// 로그인 흐름에서는 응답으로 나가지 않고 flash 메시지로 바뀝니다.
/// JSON 엔드포인트에서는 `{"error": "..."}` 본문과 함께 반환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 폼/쿼리/속성 검증 실패 (400)
    #[error("invalid input: {0}")]
    ValidationError(String),

    /// 사용자 또는 프로바이더 없음 (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// 레지스트리 불변식 위반 (409 Conflict)
    ///
    /// 이미 다른 신원이 사용 중인 이름, 또는 기존 신원이 다른 이름으로
    /// 다시 나타난 경우입니다. 사용자 입력 문제가 아니라 데이터 무결성 문제입니다.
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    ///
    /// OAuth state 불일치, 프로바이더가 인증을 거부한 경우 등에 사용됩니다.
    #[error("authentication failed: {0}")]
    AuthenticationError(String),

    /// 외부 프로바이더 호출 실패 (502)
    #[error("upstream provider error: {0}")]
    ExternalServiceError(String),

    /// 의도적으로 구현되지 않은 인증 경로 (501 Not Implemented)
    #[error("{0}")]
    NotImplemented(String),

    /// 설정 로딩/검증 에러 (500 Internal Server Error)
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// 그 밖의 내부 실패 (500)
    #[error("internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 이 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.status()
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// `Display` 가능한 외부 에러를 문맥 문자열과 함께 `InternalError`로 바꿉니다.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E: std::fmt::Display> ErrorContext<T> for Result<T, E> {
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

impl From<::config::ConfigError> for AppError {
    fn from(err: ::config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<actix_session::SessionInsertError> for AppError {
    fn from(err: actix_session::SessionInsertError) -> Self {
        AppError::InternalError(format!("세션 저장 실패: {}", err))
    }
}

impl From<actix_session::SessionGetError> for AppError {
    fn from(err: actix_session::SessionGetError) -> Self {
        AppError::InternalError(format!("세션 조회 실패: {}", err))
    }
}
