//! 도메인 계층
//!
//! - [`entities`] - 저장소에 영속화되는 사용자/게시물 레코드
//! - [`dto`] - HTTP 요청/응답 타입과 변환
//! - [`models`] - 토큰 등 비영속 모델

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Post, User};
pub use dto::{
    CreatePostRequest, LoginRequest, PageRequest, PostView, RegisterUserRequest,
    UpdatePostRequest, UpdateUserRequest, UserResponse, UserView,
};
pub use models::{AuthenticatedToken, Token, TokenClaims};
