//! 로그인 가드 미들웨어
//!
//! 세션의 `user_id`로 레지스트리에서 현재 사용자를 복원하여
//! request extension에 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)로 넣어 둡니다.
//!
//! | 세션 상태 | 결과 |
//! |-----------|------|
//! | `user_id` 없음 | `302 /signin` |
//! | `user_id`가 레지스트리에 없음 | 세션 폐기 후 `302 /signin` |
//! | 사용자 복원 성공 | 통과 |

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 로그인 사용자가 없을 때 보내는 경로
pub const SIGNIN_PATH: &str = "/signin";

/// 세션 기반 로그인 가드
///
/// ```rust,ignore
/// App::new().service(
///     web::scope("")
///         .wrap(AuthMiddleware)
///         .service(handlers::home::index)
/// );
/// ```
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
    use actix_web::cookie::Key;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App, HttpResponse};
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::repositories::users::Users;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user().name.clone())
    }

    async fn login_as(session: Session, id: web::Path<String>) -> HttpResponse {
        session.insert("user_id", id.into_inner()).unwrap();
        HttpResponse::Ok().finish()
    }

    fn users() -> web::Data<Users> {
        let users = Users::new();
        users.register("github", "42", "robin").unwrap();
        web::Data::from(Arc::new(users))
    }

    macro_rules! guarded_app {
        ($users:expr) => {
            test::init_service(
                App::new()
                    .app_data($users.clone())
                    .wrap(
                        SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                            .cookie_secure(false)
                            .build(),
                    )
                    .route("/login/{id}", web::get().to(login_as))
                    .service(web::scope("").wrap(AuthMiddleware).route("/", web::get().to(whoami))),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_required_redirects_without_session() {
        let users = users();
        let app = guarded_app!(users);

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), SIGNIN_PATH);
    }

    #[actix_web::test]
    async fn test_required_restores_user_from_session() {
        let users = users();
        let app = guarded_app!(users);

        let login = test::call_service(
            &app,
            test::TestRequest::get().uri("/login/github:42").to_request(),
        )
        .await;
        let cookie = login.response().cookies().next().unwrap().into_owned();

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/").cookie(cookie).to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "robin");
    }

    #[actix_web::test]
    async fn test_unknown_session_identity_is_purged_and_redirected() {
        let users = users();
        let app = guarded_app!(users);

        let login = test::call_service(
            &app,
            test::TestRequest::get().uri("/login/github:999").to_request(),
        )
        .await;
        let cookie = login.response().cookies().next().unwrap().into_owned();

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/").cookie(cookie).to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FOUND);
        // 폐기된 세션은 만료된 쿠키로 내려간다
        let removal = res.response().cookies().find(|c| c.name() == "id").unwrap();
        assert_eq!(removal.value(), "");
    }
}
