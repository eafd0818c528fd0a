//! 에러 처리 모듈
//!
//! [`AppError`]와 [`AppResult`]를 재export합니다.

pub mod errors;

pub use errors::*;
