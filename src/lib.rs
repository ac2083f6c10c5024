//! test-passport
//!
//! 여러 로그인 방식(로컬 자격 증명, OAuth 프로바이더, SAML)을
//! 쿠키 세션 기반 웹 애플리케이션에 연결하는 데모 서버입니다.
//!
//! 핵심 구성요소는 사용자 신원 레지스트리([`repositories::users::Users`])로,
//! `"<provider>:<localId>"` 식별자로 사용자를 중복 제거하고, 프로바이더와 무관하게
//! 표시 이름의 유일성을 보장하며, 반복 로그인 시 신원 충돌을 감지합니다.
//!
//! # Features
//!
//! - **로컬 로그인**: 시작 시 등록되는 두 계정의 사용자명/패스워드 인증
//! - **OAuth 2.0**: GitHub, Google 인가 코드 흐름
//! - **SAML / Facebook**: 설정은 받지만 로그인은 `not implemented`로 실패
//! - **쿠키 세션**: 서명/암호화된 쿠키에 `user_id`, flash 메시지, OAuth state 보관
//! - **정적 파일**: 로그인한 사용자에게만 제공
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 공개 경로 / 로그인 가드 스코프
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답, 리디렉션, flash
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AuthService, FederatedProvider, SessionService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← Users (프로세스 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use test_passport::repositories::users::Users;
//! use test_passport::services::auth::{AuthService, FederatedProviders};
//! use test_passport::services::users::seed_users;
//!
//! let users = Arc::new(Users::new());
//! seed_users(&users)?;
//!
//! let auth = AuthService::new(users.clone(), FederatedProviders::new());
//! let outcome = auth.authenticate_local("barbara.gordon", "IAmBatgirl");
//! assert!(outcome.is_authenticated());
//! ```

pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
