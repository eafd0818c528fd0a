//! 사용자 DTO 모듈
//!
//! - `request` - 회원가입, 로그인, 수정 요청
//! - `response` - 회원가입 응답, 공개 사용자 뷰

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
