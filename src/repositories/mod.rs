//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserRepository`]와 [`PostRepository`] trait에만 의존하며,
//! 실제 저장소 구현은 시작 시점에 선택됩니다.
//!
//! | 구현 | 용도 |
//! |------|------|
//! | [`MongoUserRepository`] / [`MongoPostRepository`] | 운영 환경 (MongoDB) |
//! | [`InMemoryStore`] | 테스트 및 로컬 실행 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{InMemoryStore, PostRepository, UserRepository};
//!
//! let store = Arc::new(InMemoryStore::new());
//! let users: Arc<dyn UserRepository> = store.clone();
//! let posts: Arc<dyn PostRepository> = store;
//! ```

pub mod users;
pub mod posts;
pub mod memory;
mod mongo_support;

pub use users::{MongoUserRepository, UserRepository};
pub use posts::{MongoPostRepository, PostRepository};
pub use memory::InMemoryStore;

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";
/// 게시물 컬렉션 이름
pub const POSTS_COLLECTION: &str = "posts";
/// 정수 ID 시퀀스 컬렉션 이름
pub const COUNTERS_COLLECTION: &str = "counters";
