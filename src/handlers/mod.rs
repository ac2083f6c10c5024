//! # 요청 핸들러
//!
//! 라우트별 핸들러 함수 모음입니다. 요청 흐름은 다음 순서를 따릅니다.
//!
//! ```text
//! Browser (session cookie)
//!   → SessionMiddleware → AuthMiddleware
//!   → handlers::{auth, home}
//!   → AuthService / SessionService
//!   → Users (in-memory registry)
//! ```
//!
//! - [`auth`] - 로그인 폼, 로컬/외부 로그인, 로그아웃 (`/signin*`, `/signout`)
//! - [`home`] - 로그인 사용자 화면과 JSON API (`/`, `/api/v1/me`)
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고 상태 코드와 JSON 본문은
//! `AppError`의 `ResponseError` 구현이 정합니다. 로그인 흐름의 실패만은
//! 에러 응답 대신 flash 메시지와 `/signin` 리디렉션으로 끝납니다.

pub mod auth;
pub mod home;
