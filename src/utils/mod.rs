//! 공통 유틸리티 모듈
//!
//! - [`validation`] - 선언적 검증 결과를 위반 목록으로 변환
//! - [`display_terminal`] - 초기화 과정 터미널 출력

pub mod display_terminal;
pub mod validation;

pub use validation::{ensure_valid, violations_of, FieldViolation};
