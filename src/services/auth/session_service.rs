//! 세션 상태 접근 헬퍼
//!
//! 쿠키 세션에 보관되는 키는 세 가지입니다.
//!
//! | 키 | 값 |
//! |----|----|
//! | `user_id` | 로그인한 사용자의 프로바이더 한정 `id` |
//! | `flash` | 다음 로그인 화면에서 한 번 보여줄 메시지 |
//! | `oauth_state` | 진행 중인 OAuth 흐름의 `state` |

use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use uuid::Uuid;
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};

pub const USER_ID_KEY: &str = "user_id";
pub const FLASH_KEY: &str = "flash";
pub const OAUTH_STATE_KEY: &str = "oauth_state";

/// 세션 쿠키 이름
pub const SESSION_COOKIE: &str = "test_passport";

pub struct SessionService;

impl SessionService {
    /// 암호화된 쿠키 세션 미들웨어
    ///
    /// 평문 HTTP 데모 서버이므로 `Secure` 속성은 끕니다.
    pub fn middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), key)
            .cookie_name(SESSION_COOKIE.to_string())
            .cookie_content_security(CookieContentSecurity::Private)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .cookie_secure(false)
            .build()
    }

    /// 로그인 성공 시 세션 키를 갱신하고 사용자 `id`를 저장합니다.
    pub fn login(session: &Session, user: &User) -> AppResult<()> {
        session.renew();
        session.insert(USER_ID_KEY, &user.id)?;
        Ok(())
    }

    /// 세션에 저장된 사용자 `id`
    pub fn user_id(session: &Session) -> AppResult<Option<String>> {
        Ok(session.get::<String>(USER_ID_KEY)?)
    }

    /// 세션 전체를 폐기합니다.
    pub fn logout(session: &Session) {
        session.purge();
    }

    pub fn set_flash(session: &Session, message: &str) -> AppResult<()> {
        session.insert(FLASH_KEY, message)?;
        Ok(())
    }

    /// 대기 중인 flash 메시지를 꺼냅니다. 꺼낸 메시지는 세션에서 제거됩니다.
    pub fn take_flash(session: &Session) -> Option<String> {
        session.remove_as::<String>(FLASH_KEY).and_then(Result::ok)
    }

    /// 새 OAuth `state` 값
    pub fn new_oauth_state() -> String {
        Uuid::new_v4().to_string()
    }

    /// 인가 URL로 보낸 `state`를 콜백 검증용으로 세션에 저장합니다.
    pub fn remember_oauth_state(session: &Session, state: &str) -> AppResult<()> {
        session.insert(OAUTH_STATE_KEY, state)?;
        Ok(())
    }

    /// 콜백의 `state`를 세션 값과 비교합니다. 저장된 값은 한 번만 쓰입니다.
    pub fn verify_oauth_state(session: &Session, state: &str) -> AppResult<()> {
        let expected = session
            .remove_as::<String>(OAUTH_STATE_KEY)
            .and_then(Result::ok);

        match expected {
            Some(expected) if !state.is_empty() && expected == state => Ok(()),
            _ => Err(AppError::AuthenticationError(
                "유효하지 않은 OAuth state".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_session::SessionExt;
    use actix_web::test::TestRequest;

    fn session() -> Session {
        TestRequest::default().to_http_request().get_session()
    }

    #[test]
    fn test_login_stores_user_id() {
        let session = session();
        let user = User::new("github:42".to_string(), "robin".to_string());

        SessionService::login(&session, &user).unwrap();

        assert_eq!(
            SessionService::user_id(&session).unwrap().as_deref(),
            Some("github:42")
        );

        SessionService::logout(&session);
        assert_eq!(SessionService::user_id(&session).unwrap(), None);
    }

    #[test]
    fn test_flash_is_shown_once() {
        let session = session();
        SessionService::set_flash(&session, "invalid username or password").unwrap();

        assert_eq!(
            SessionService::take_flash(&session).as_deref(),
            Some("invalid username or password")
        );
        assert_eq!(SessionService::take_flash(&session), None);
    }

    #[test]
    fn test_oauth_state_round_trip_is_single_use() {
        let session = session();
        let state = SessionService::new_oauth_state();
        SessionService::remember_oauth_state(&session, &state).unwrap();

        assert!(SessionService::verify_oauth_state(&session, &state).is_ok());
        assert!(matches!(
            SessionService::verify_oauth_state(&session, &state),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_mismatched_or_empty_state_is_rejected() {
        let session = session();
        SessionService::remember_oauth_state(&session, &SessionService::new_oauth_state()).unwrap();

        assert!(SessionService::verify_oauth_state(&session, "forged").is_err());
        assert!(SessionService::verify_oauth_state(&session, "").is_err());
    }
}
