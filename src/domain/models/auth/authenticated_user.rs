use std::future::{ready, Ready};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;

/// 세션에서 복원된 현재 사용자
///
/// 로그인 가드 미들웨어가 세션의 `user_id`로 레지스트리를 조회한 뒤
/// request extension에 넣어 둔 값입니다. 가드 밖의 경로에서 꺼내려 하면 401입니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    pub fn user(&self) -> &User {
        &self.0
    }

    pub fn into_inner(self) -> User {
        self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let restored = req.extensions().get::<Self>().cloned();
        ready(restored.ok_or_else(|| {
            AppError::AuthenticationError("the user could not be found".to_string())
        }))
    }
}
