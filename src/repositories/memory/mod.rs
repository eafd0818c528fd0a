//! # 인메모리 저장소
//!
//! 테스트와 로컬 실행(`STORAGE=memory`)에서 사용하는 저장소입니다.
//! 사용자와 게시물을 하나의 잠금 아래에 두어 유니크 검사와
//! 연쇄 삭제가 다른 요청과 섞이지 않도록 합니다.
//!
//! ```rust,ignore
//! let store = Arc::new(InMemoryStore::new());
//! let users: Arc<dyn UserRepository> = store.clone();
//! let posts: Arc<dyn PostRepository> = store;
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use crate::domain::dto::PageRequest;
use crate::domain::entities::{Post, User};
use crate::errors::{AppError, AppResult, ErrorContext};
use super::{PostRepository, UserRepository};

#[derive(Default)]
struct MemoryState {
    users: BTreeMap<i32, User>,
    posts: BTreeMap<i32, Post>,
    last_user_id: i32,
    last_post_id: i32,
}

impl MemoryState {
    /// `exclude_id`를 제외한 사용자 중 유니크 필드가 겹치는 항목을 찾습니다.
    fn unique_violation(&self, user: &User, exclude_id: i32) -> Option<&'static str> {
        let others = || self.users.values().filter(move |u| u.id != exclude_id);

        if others().any(|u| u.name == user.name) {
            return Some("This user name already exists");
        }
        if others().any(|u| u.email == user.email) {
            return Some("This user email already exists");
        }
        if others().any(|u| u.nickname == user.nickname) {
            return Some("This user nickname already exists");
        }
        None
    }
}

/// 사용자/게시물 리포지토리를 모두 구현하는 인메모리 저장소
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, MemoryState>> {
        self.state.read().context("Failed to acquire read lock")
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, MemoryState>> {
        self.state.write().context("Failed to acquire write lock")
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut state = self.write()?;

        if let Some(message) = state.unique_violation(&user, 0) {
            return Err(AppError::ConflictError(message.to_string()));
        }

        state.last_user_id += 1;
        user.id = state.last_user_id;
        state.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.read()?.users.values().find(|u| u.email == email).cloned())
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        Ok(self.read()?.users.values().any(|u| u.name == name))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.read()?.users.values().any(|u| u.email == email))
    }

    async fn exists_by_nickname(&self, nickname: &str) -> AppResult<bool> {
        Ok(self.read()?.users.values().any(|u| u.nickname == nickname))
    }

    async fn update(&self, user: &User) -> AppResult<bool> {
        let mut state = self.write()?;

        if !state.users.contains_key(&user.id) {
            return Ok(false);
        }
        if let Some(message) = state.unique_violation(user, user.id) {
            return Err(AppError::ConflictError(message.to_string()));
        }

        state.users.insert(user.id, user.clone());
        Ok(true)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut state = self.write()?;

        if state.users.remove(&id).is_none() {
            return Ok(false);
        }
        state.posts.retain(|_, post| post.user_id != id);

        Ok(true)
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn create(&self, mut post: Post) -> AppResult<Post> {
        let mut state = self.write()?;

        state.last_post_id += 1;
        post.id = state.last_post_id;
        state.posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Post>> {
        Ok(self.read()?.posts.get(&id).cloned())
    }

    async fn list_paged(&self, page: PageRequest) -> AppResult<Vec<Post>> {
        let state = self.read()?;
        Ok(page.window(state.posts.values()).cloned().collect())
    }

    async fn list_by_user_paged(&self, user_id: i32, page: PageRequest) -> AppResult<Vec<Post>> {
        let state = self.read()?;
        let owned = state.posts.values().filter(|p| p.is_owned_by(user_id));
        Ok(page.window(owned).cloned().collect())
    }

    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Post>> {
        let state = self.read()?;
        Ok(state
            .posts
            .values()
            .filter(|p| p.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn update(&self, post: &Post) -> AppResult<bool> {
        let mut state = self.write()?;

        match state.posts.get_mut(&post.id) {
            Some(stored) => {
                *stored = post.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.write()?.posts.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(name: &str, email: &str, nickname: &str) -> User {
        User::new(
            name.to_string(),
            email.to_string(),
            nickname.to_string(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            "icon.png".to_string(),
            "hello".to_string(),
        )
    }

    fn post(title: &str, user_id: i32) -> Post {
        Post::new(title.to_string(), "body".to_string(), false, None, user_id)
    }

    #[actix_web::test]
    async fn test_create_user_assigns_sequential_ids() {
        let store = InMemoryStore::new();

        let ann = UserRepository::create(&store, user("Ann", "a@x.com", "ann")).await.unwrap();
        let bob = UserRepository::create(&store, user("Bob", "b@x.com", "bob")).await.unwrap();

        assert_eq!(ann.id, 1);
        assert_eq!(bob.id, 2);
        assert!(store.exists_by_email("a@x.com").await.unwrap());
        assert!(!store.exists_by_nickname("carl").await.unwrap());
    }

    #[actix_web::test]
    async fn test_create_user_rejects_duplicates() {
        let store = InMemoryStore::new();
        UserRepository::create(&store, user("Ann", "a@x.com", "ann")).await.unwrap();

        let result = UserRepository::create(&store, user("Other", "a@x.com", "other")).await;

        match result {
            Err(AppError::ConflictError(msg)) => assert_eq!(msg, "This user email already exists"),
            other => panic!("Expected ConflictError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_update_user_checks_nickname_against_others_only() {
        let store = InMemoryStore::new();
        let mut ann = UserRepository::create(&store, user("Ann", "a@x.com", "ann")).await.unwrap();
        UserRepository::create(&store, user("Bob", "b@x.com", "bob")).await.unwrap();

        ann.user_description = "updated".to_string();
        assert!(UserRepository::update(&store, &ann).await.unwrap());

        ann.nickname = "bob".to_string();
        assert!(matches!(
            UserRepository::update(&store, &ann).await,
            Err(AppError::ConflictError(_))
        ));

        let mut ghost = user("Ghost", "g@x.com", "ghost");
        ghost.id = 99;
        assert!(!UserRepository::update(&store, &ghost).await.unwrap());
    }

    #[actix_web::test]
    async fn test_delete_user_cascades_to_posts() {
        let store = InMemoryStore::new();
        let ann = UserRepository::create(&store, user("Ann", "a@x.com", "ann")).await.unwrap();
        let bob = UserRepository::create(&store, user("Bob", "b@x.com", "bob")).await.unwrap();
        PostRepository::create(&store, post("a1", ann.id)).await.unwrap();
        PostRepository::create(&store, post("b1", bob.id)).await.unwrap();
        PostRepository::create(&store, post("a2", ann.id)).await.unwrap();

        assert!(UserRepository::delete(&store, ann.id).await.unwrap());
        assert!(!UserRepository::delete(&store, ann.id).await.unwrap());

        let remaining = store.list_paged(PageRequest::default()).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "b1");
        assert!(store.list_by_user(ann.id).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_post_pagination_follows_insertion_order() {
        let store = InMemoryStore::new();
        for i in 1..=5 {
            PostRepository::create(&store, post(&format!("p{}", i), 1 + i % 2)).await.unwrap();
        }

        let page = store.list_paged(PageRequest::new(1, 2)).await.unwrap();
        let titles: Vec<&str> = page.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["p2", "p3"]);

        let owned = store.list_by_user_paged(2, PageRequest::new(0, 10)).await.unwrap();
        let titles: Vec<&str> = owned.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["p1", "p3", "p5"]);

        assert!(store.list_paged(PageRequest::new(0, 0)).await.unwrap().is_empty());
        assert!(store.list_paged(PageRequest::new(10, 5)).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_and_delete_post() {
        let store = InMemoryStore::new();
        let mut created = PostRepository::create(&store, post("first", 1)).await.unwrap();

        created.title = "renamed".to_string();
        assert!(PostRepository::update(&store, &created).await.unwrap());
        let stored = PostRepository::find_by_id(&store, created.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "renamed");

        assert!(PostRepository::delete(&store, created.id).await.unwrap());
        assert!(PostRepository::find_by_id(&store, created.id).await.unwrap().is_none());
        assert!(!PostRepository::delete(&store, created.id).await.unwrap());
    }
}
