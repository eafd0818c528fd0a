//! # 사용자 관리 서비스 구현
//!
//! 가입 이후의 사용자 생명주기(조회, 프로필 수정, 탈퇴)를 담당합니다.
//!
//! ## 규칙
//!
//! - `name`과 `email`은 가입 이후 변경할 수 없습니다.
//! - 수정 가능한 필드는 `nickname`과 `userDescription`뿐이며, 닉네임은 다른 사용자와 겹칠 수 없습니다.
//! - 탈퇴 시 사용자가 작성한 게시물도 함께 삭제됩니다.

use std::sync::Arc;
use crate::{
    domain::dto::{UpdateUserRequest, UserView},
    domain::entities::User,
    errors::{AppError, AppResult},
    repositories::{PostRepository, UserRepository},
    services::require_positive_id,
    utils::ensure_valid,
};

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    async fn find_existing(&self, id: i32) -> AppResult<User> {
        require_positive_id(id, "User")?;

        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID: {} not found", id)))
    }

    async fn view_of(&self, user: User) -> AppResult<UserView> {
        let posts = self.posts.list_by_user(user.id).await?;
        Ok(UserView::from_parts(user, posts))
    }

    /// 사용자와 작성한 게시물 목록을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 0 이하의 ID
    /// * `AppError::NotFound` - 사용자 없음
    pub async fn get_one(&self, id: i32) -> AppResult<UserView> {
        let user = self.find_existing(id).await?;
        log::debug!("사용자 조회: id={}", id);

        self.view_of(user).await
    }

    /// 닉네임과 자기소개를 덮어씁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 0 이하의 ID, 이름/이메일 변경 시도 (생략도 변경으로 간주)
    /// * `AppError::NotFound` - 사용자 없음
    /// * `AppError::ValidationError` - 닉네임/자기소개 규칙 위반
    /// * `AppError::ConflictError` - 다른 사용자가 쓰는 닉네임
    pub async fn update(&self, id: i32, request: UpdateUserRequest) -> AppResult<UserView> {
        let mut user = self.find_existing(id).await?;

        if request.changes_identity(&user.name, &user.email) {
            log::warn!("사용자 {} 이름/이메일 변경 시도", id);
            return Err(AppError::BadRequest(
                "You cannot change name or email from an user".to_string(),
            ));
        }

        ensure_valid(&request)?;
        user.apply_profile(request.nickname, request.user_description);

        if !self.users.update(&user).await? {
            return Err(AppError::NotFound(format!("User with ID: {} not found", id)));
        }
        log::info!("사용자 수정: id={}", id);

        self.view_of(user).await
    }

    /// 사용자와 그 사용자의 게시물을 모두 삭제합니다.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        require_positive_id(id, "User")?;

        if !self.users.delete(id).await? {
            return Err(AppError::NotFound(format!("User with ID: {} not found", id)));
        }
        log::info!("사용자 삭제: id={} (게시물 포함)", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::dto::PageRequest;
    use crate::domain::entities::Post;
    use crate::repositories::InMemoryStore;

    fn user(name: &str, email: &str, nickname: &str) -> User {
        User::new(
            name.to_string(),
            email.to_string(),
            nickname.to_string(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            "i.png".to_string(),
            "hi".to_string(),
        )
    }

    fn patch(name: Option<&str>, email: Option<&str>, nickname: &str) -> UpdateUserRequest {
        UpdateUserRequest {
            user_id: None,
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            nickname: nickname.to_string(),
            user_description: "updated".to_string(),
        }
    }

    async fn setup() -> (UserService, Arc<InMemoryStore>, User) {
        let store = Arc::new(InMemoryStore::new());
        let ann = UserRepository::create(store.as_ref(), user("Ann", "a@x.com", "ann"))
            .await
            .unwrap();

        (UserService::new(store.clone(), store.clone()), store, ann)
    }

    #[actix_web::test]
    async fn test_get_one_includes_posts() {
        let (service, store, ann) = setup().await;
        PostRepository::create(
            store.as_ref(),
            Post::new("hi".to_string(), "body".to_string(), false, None, ann.id),
        )
        .await
        .unwrap();

        let view = service.get_one(ann.id).await.unwrap();

        assert_eq!(view.user_id, ann.id);
        assert_eq!(view.posts.len(), 1);
        assert_eq!(view.posts[0].user_id, ann.id);

        assert!(matches!(service.get_one(0).await, Err(AppError::BadRequest(_))));
        assert!(matches!(service.get_one(5).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_profile() {
        let (service, _, ann) = setup().await;

        let view = service
            .update(ann.id, patch(Some("Ann"), Some("a@x.com"), "annie"))
            .await
            .unwrap();

        assert_eq!(view.nickname, "annie");
        assert_eq!(view.user_description, "updated");
    }

    #[actix_web::test]
    async fn test_update_rejects_identity_change() {
        let (service, _, ann) = setup().await;

        match service.update(ann.id, patch(Some("Bob"), Some("a@x.com"), "ann")).await {
            Err(AppError::BadRequest(msg)) => {
                assert_eq!(msg, "You cannot change name or email from an user")
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }

        assert!(matches!(
            service.update(ann.id, patch(Some("Ann"), None, "ann")).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_rejects_taken_nickname() {
        let (service, store, ann) = setup().await;
        UserRepository::create(store.as_ref(), user("Bob", "b@x.com", "bob"))
            .await
            .unwrap();

        assert!(matches!(
            service.update(ann.id, patch(Some("Ann"), Some("a@x.com"), "bob")).await,
            Err(AppError::ConflictError(_))
        ));
        assert!(matches!(
            service.update(ann.id, patch(Some("Ann"), Some("a@x.com"), "")).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_delete_cascades() {
        let (service, store, ann) = setup().await;
        PostRepository::create(
            store.as_ref(),
            Post::new("hi".to_string(), "body".to_string(), false, None, ann.id),
        )
        .await
        .unwrap();

        service.delete(ann.id).await.unwrap();

        assert!(store.list_paged(PageRequest::default()).await.unwrap().is_empty());
        assert!(matches!(service.delete(ann.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(0).await, Err(AppError::BadRequest(_))));
    }
}
