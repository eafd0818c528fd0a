//! # 게시물 서비스 구현
//!
//! 게시물의 작성, 페이지 단위 조회, 수정, 삭제 규칙을 구현합니다.
//! 작성자 존재 여부는 작성 시점에만 확인하며, 이후 사용자가 삭제되면
//! 해당 게시물도 사용자 삭제와 함께 제거됩니다.

use std::sync::Arc;
use crate::{
    domain::dto::{CreatePostRequest, PageRequest, PostView, UpdatePostRequest},
    domain::entities::Post,
    errors::{AppError, AppResult},
    repositories::{PostRepository, UserRepository},
    utils::ensure_valid,
};
use crate::services::require_positive_id;

/// 게시물 비즈니스 로직 서비스
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// 새 게시물을 작성합니다. ID와 작성 시각은 서버가 정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 제목/본문/첨부 규칙 위반
    /// * `AppError::BadRequest` - 존재하지 않는 작성자
    pub async fn create(&self, request: CreatePostRequest) -> AppResult<PostView> {
        ensure_valid(&request)?;

        if self.users.find_by_id(request.user_id).await?.is_none() {
            return Err(AppError::BadRequest("This user does not exist".to_string()));
        }

        let created = self.posts.create(Post::from(request)).await?;
        log::info!("게시물 작성: id={}, user_id={}", created.id, created.user_id);

        Ok(PostView::from(created))
    }

    /// 특정 사용자의 게시물 한 페이지를 조회합니다.
    pub async fn list_by_user(&self, user_id: i32, page: PageRequest) -> AppResult<Vec<PostView>> {
        require_positive_id(user_id, "User")?;

        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User with ID: {} not found", user_id)));
        }

        let posts = self.posts.list_by_user_paged(user_id, page).await?;
        log::debug!("사용자 {} 게시물 조회: {}건 ({:?})", user_id, posts.len(), page);

        Ok(posts.into_iter().map(PostView::from).collect())
    }

    /// 전체 게시물 한 페이지를 조회합니다.
    pub async fn list_all(&self, page: PageRequest) -> AppResult<Vec<PostView>> {
        let posts = self.posts.list_paged(page).await?;
        log::debug!("전체 게시물 조회: {}건 ({:?})", posts.len(), page);

        Ok(posts.into_iter().map(PostView::from).collect())
    }

    /// 게시물의 제목, 본문, 공개 여부, 첨부를 덮어씁니다.
    ///
    /// 작성자 변경 시도는 검증 규칙보다 먼저 거부되며 아무것도 적용되지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 0 이하의 ID, 작성자 변경 시도
    /// * `AppError::NotFound` - 게시물 없음
    /// * `AppError::ValidationError` - 제목/본문/첨부 규칙 위반
    pub async fn update(&self, id: i32, request: UpdatePostRequest) -> AppResult<PostView> {
        require_positive_id(id, "Post")?;

        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post with ID: {} not found", id)))?;

        if !post.is_owned_by(request.user_id) {
            log::warn!("게시물 {} 작성자 변경 시도: {} -> {}", id, post.user_id, request.user_id);
            return Err(AppError::BadRequest("You cannot change user id".to_string()));
        }

        ensure_valid(&request)?;
        request.apply_to(&mut post);

        if !self.posts.update(&post).await? {
            return Err(AppError::NotFound(format!("Post with ID: {} not found", id)));
        }
        log::info!("게시물 수정: id={}", id);

        Ok(PostView::from(post))
    }

    /// 게시물을 영구 삭제합니다.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        require_positive_id(id, "Post")?;

        if !self.posts.delete(id).await? {
            return Err(AppError::NotFound(format!("Post with ID: {} not found", id)));
        }
        log::info!("게시물 삭제: id={}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::entities::User;
    use crate::repositories::InMemoryStore;

    async fn setup() -> (PostService, i32) {
        let store = Arc::new(InMemoryStore::new());
        let user = UserRepository::create(
            store.as_ref(),
            User::new(
                "Ann".to_string(),
                "a@x.com".to_string(),
                "ann".to_string(),
                NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                "i.png".to_string(),
                "hi".to_string(),
            ),
        )
        .await
        .unwrap();

        (PostService::new(store.clone(), store), user.id)
    }

    fn new_post(title: &str, user_id: i32) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            body: "first post".to_string(),
            is_private: false,
            files: None,
            user_id,
        }
    }

    fn patch(title: &str, user_id: i32) -> UpdatePostRequest {
        UpdatePostRequest {
            post_id: None,
            title: title.to_string(),
            body: "edited".to_string(),
            is_private: true,
            files: Some("a.png".to_string()),
            user_id,
        }
    }

    #[actix_web::test]
    async fn test_create_requires_existing_user() {
        let (service, user_id) = setup().await;

        let created = service.create(new_post("hi", user_id)).await.unwrap();
        assert!(created.post_id > 0);
        assert_eq!(created.user_id, user_id);

        match service.create(new_post("hi", 99)).await {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "This user does not exist"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_create_validates_before_lookup() {
        let (service, _) = setup().await;

        assert!(matches!(
            service.create(new_post("", 99)).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_list_by_user_checks_id_and_existence() {
        let (service, user_id) = setup().await;
        for i in 0..3 {
            service.create(new_post(&format!("p{}", i), user_id)).await.unwrap();
        }

        let page = service.list_by_user(user_id, PageRequest::new(1, 1)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "p1");

        assert!(matches!(
            service.list_by_user(0, PageRequest::default()).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.list_by_user(42, PageRequest::default()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_list_all_respects_take() {
        let (service, user_id) = setup().await;
        for i in 0..12 {
            service.create(new_post(&format!("p{}", i), user_id)).await.unwrap();
        }

        assert_eq!(service.list_all(PageRequest::default()).await.unwrap().len(), 10);
        assert_eq!(service.list_all(PageRequest::new(10, 10)).await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_update_rejects_owner_change_without_applying() {
        let (service, user_id) = setup().await;
        let created = service.create(new_post("hi", user_id)).await.unwrap();

        match service.update(created.post_id, patch("changed", user_id + 1)).await {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "You cannot change user id"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }

        let unchanged = service.list_all(PageRequest::default()).await.unwrap();
        assert_eq!(unchanged[0].title, "hi");
    }

    #[actix_web::test]
    async fn test_update_overwrites_mutable_fields() {
        let (service, user_id) = setup().await;
        let created = service.create(new_post("hi", user_id)).await.unwrap();

        let updated = service.update(created.post_id, patch("changed", user_id)).await.unwrap();

        assert_eq!(updated.post_id, created.post_id);
        assert_eq!(updated.post_date, created.post_date);
        assert_eq!(updated.title, "changed");
        assert!(updated.is_private);
        assert_eq!(updated.files.as_deref(), Some("a.png"));

        assert!(matches!(
            service.update(0, patch("x", user_id)).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.update(77, patch("x", user_id)).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.update(created.post_id, patch("", user_id)).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_delete() {
        let (service, user_id) = setup().await;
        let created = service.create(new_post("hi", user_id)).await.unwrap();

        service.delete(created.post_id).await.unwrap();

        assert!(matches!(service.delete(created.post_id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(-1).await, Err(AppError::BadRequest(_))));
    }
}
