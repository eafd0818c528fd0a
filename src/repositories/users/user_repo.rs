//! # 사용자 리포지토리 인터페이스

use async_trait::async_trait;
use crate::domain::entities::User;
use crate::errors::AppResult;

/// 사용자 저장소 추상화
///
/// 구현체는 `name`, `email`, `nickname`에 대한 유니크 제약을 스스로 보장해야 하며,
/// 위반 시 [`AppError::ConflictError`](crate::errors::AppError::ConflictError)를 반환합니다.
/// 서비스의 사전 중복 검사와 실제 저장 사이의 경쟁 상태는 이 제약으로 막습니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 ID가 할당된 레코드를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn exists_by_name(&self, name: &str) -> AppResult<bool>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    async fn exists_by_nickname(&self, nickname: &str) -> AppResult<bool>;

    /// 레코드 전체를 교체합니다. 대상이 없으면 `Ok(false)`.
    async fn update(&self, user: &User) -> AppResult<bool>;

    /// 사용자와 그 사용자가 소유한 모든 게시물을 삭제합니다. 대상이 없으면 `Ok(false)`.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}
