//! 게시물 DTO 모듈

pub mod request;
pub mod response;

pub use request::{CreatePostRequest, UpdatePostRequest};
pub use response::PostView;
