//! Data Transfer Objects
//!
//! HTTP 요청/응답 본문 타입과 엔티티 ↔ 뷰 변환(`From` 구현)을 정의합니다.
//! 모든 JSON 필드는 camelCase를 사용합니다.

pub mod users;
pub mod posts;
pub mod pagination;

pub use users::{LoginRequest, RegisterUserRequest, UpdateUserRequest, UserResponse, UserView};
pub use posts::{CreatePostRequest, PostView, UpdatePostRequest};
pub use pagination::PageRequest;
