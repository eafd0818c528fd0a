//! 사용자 관련 요청 DTO
//!
//! 검증 규칙은 `validator` derive 속성으로 선언하고,
//! 서비스 계층에서 [`ensure_valid`](crate::utils::ensure_valid)로 평가합니다.

pub mod register_request;
pub mod login_request;
pub mod update_user_request;

pub use register_request::RegisterUserRequest;
pub use login_request::LoginRequest;
pub use update_user_request::UpdateUserRequest;
