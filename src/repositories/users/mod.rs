//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository) trait과
//! MongoDB 구현 [`MongoUserRepository`](mongo_user_repo::MongoUserRepository)를 제공합니다.

pub mod user_repo;
pub mod mongo_user_repo;

pub use user_repo::UserRepository;
pub use mongo_user_repo::MongoUserRepository;
