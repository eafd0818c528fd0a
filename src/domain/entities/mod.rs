//! 도메인 엔티티 모듈
//!
//! 저장소에 영속화되는 레코드 타입을 정의합니다.
//! HTTP 응답에는 엔티티를 직접 노출하지 않고 [`dto`](crate::domain::dto)로 변환합니다.

pub mod users;
pub mod posts;

pub use users::user::User;
pub use posts::post::Post;
