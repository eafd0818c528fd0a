//! # 게시물 리포지토리 인터페이스

use async_trait::async_trait;
use crate::domain::dto::PageRequest;
use crate::domain::entities::Post;
use crate::errors::AppResult;

/// 게시물 저장소 추상화
///
/// 목록 조회는 저장 순서(ID 오름차순)를 따르며 별도의 정렬 키는 없습니다.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// 새 게시물을 저장하고 ID가 할당된 레코드를 반환합니다.
    async fn create(&self, post: Post) -> AppResult<Post>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Post>>;

    /// 전체 게시물 중 한 페이지를 반환합니다.
    async fn list_paged(&self, page: PageRequest) -> AppResult<Vec<Post>>;

    /// 특정 사용자의 게시물 중 한 페이지를 반환합니다.
    async fn list_by_user_paged(&self, user_id: i32, page: PageRequest) -> AppResult<Vec<Post>>;

    /// 특정 사용자의 게시물 전체를 반환합니다.
    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Post>>;

    /// 레코드 전체를 교체합니다. 대상이 없으면 `Ok(false)`.
    async fn update(&self, post: &Post) -> AppResult<bool>;

    /// 대상이 없으면 `Ok(false)`.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}
