//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 리포지토리 trait 객체를 생성자로 주입받으며,
//! 저장소 구현(MongoDB 또는 인메모리)을 알지 못합니다.
//!
//! - [`auth`] - 회원 가입, 로그인, 토큰 발급/검증
//! - [`posts`] - 게시물 작성, 목록, 수정, 삭제
//! - [`users`] - 사용자 조회, 프로필 수정, 탈퇴
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{posts::PostService, users::UserService};
//!
//! let post_service = PostService::new(post_repo.clone(), user_repo.clone());
//! let user_service = UserService::new(user_repo, post_repo);
//! ```

pub mod auth;
pub mod posts;
pub mod users;

use crate::errors::{AppError, AppResult};

/// 경로로 받은 ID가 양수인지 확인합니다.
///
/// `kind`는 메시지에 들어갈 리소스 이름입니다 (`"User"`, `"Post"`).
pub(crate) fn require_positive_id(id: i32, kind: &str) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::BadRequest(format!("Enter a valid {} ID", kind)));
    }
    Ok(())
}
