//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`html_utils`] - HTML 이스케이프와 화면 조립
//! - [`display_terminal`] - 시작 배너 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::html_utils::escape_html;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let safe = escape_html("<robin>");
//! print_boxed_title("TEST PASSPORT");
//! ```

pub mod html_utils;
pub mod display_terminal;
