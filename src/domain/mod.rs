//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - User 레코드
//! ├── DTOs      - 로그인 폼, 콜백 쿼리, JSON 응답
//! └── Models    - 인증 결과, 외부 프로바이더 응답
//! ```

pub mod entities;
pub mod dto;
pub mod models;
