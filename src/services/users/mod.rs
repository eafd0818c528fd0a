//! 사용자 관리 서비스 모듈
//!
//! 가입과 로그인은 [`auth`](crate::services::auth)에서 담당하고,
//! 이 모듈은 가입 이후의 조회, 프로필 수정, 탈퇴를 담당합니다.

pub mod user_service;

pub use user_service::UserService;
