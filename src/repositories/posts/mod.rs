//! 게시물 데이터 액세스 계층

pub mod post_repo;
pub mod mongo_post_repo;

pub use post_repo::PostRepository;
pub use mongo_post_repo::MongoPostRepository;
