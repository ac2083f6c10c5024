use std::rc::Rc;
use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::middlewares::auth_middleware::SIGNIN_PATH;
use crate::repositories::users::Users;
use crate::services::auth::SessionService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let Some(user) = restore_user(&req)? else {
                log::debug!("로그인 필요: {} → {}", req.path(), SIGNIN_PATH);
                let response = HttpResponse::Found()
                    .insert_header((header::LOCATION, SIGNIN_PATH))
                    .finish();
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            };

            log::debug!("세션 사용자 복원: {}", user.user().id);
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 세션의 `user_id`로 사용자를 찾습니다.
///
/// 세션을 읽을 수 없거나 레지스트리에 없는 `id`면 세션을 폐기하고 `None`을 돌려줍니다.
fn restore_user(req: &ServiceRequest) -> Result<Option<AuthenticatedUser>, AppError> {
    let users = req
        .app_data::<web::Data<Users>>()
        .ok_or_else(|| AppError::InternalError("user registry is not configured".to_string()))?;
    let session = req.get_session();

    let user_id = match SessionService::user_id(&session) {
        Ok(Some(user_id)) => user_id,
        Ok(None) => return Ok(None),
        Err(err) => {
            log::warn!("세션 읽기 실패, 세션 폐기: {}", err);
            SessionService::logout(&session);
            return Ok(None);
        }
    };

    match users.lookup_by_id(&user_id) {
        Some(user) => Ok(Some(AuthenticatedUser(user))),
        None => {
            log::warn!("세션의 사용자를 찾을 수 없음, 세션 폐기: {}", user_id);
            SessionService::logout(&session);
            Ok(None)
        }
    }
}
