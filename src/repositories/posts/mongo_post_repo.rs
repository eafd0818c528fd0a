//! # MongoDB 게시물 리포지토리
//!
//! - **컬렉션**: `posts` (`_id`는 `counters.posts` 시퀀스로 발급되는 정수)
//! - **인덱스**: user_id

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::{dto::PageRequest, entities::Post},
    errors::{AppError, AppResult},
};
use super::post_repo::PostRepository;
use crate::repositories::{mongo_support, POSTS_COLLECTION};

/// 페이지 요청을 드라이버의 skip/limit 값으로 바꿉니다.
///
/// 드라이버는 두 값을 BSON int64로 보냅니다. 빈 페이지가 확실하면 `None`입니다.
/// MongoDB에서 limit 0은 "제한 없음"이므로 `take == 0`도 `None`입니다.
fn page_window(page: PageRequest) -> Option<(u64, i64)> {
    if page.take == 0 || i64::try_from(page.skip).is_err() {
        return None;
    }
    Some((page.skip, i64::try_from(page.take).unwrap_or(i64::MAX)))
}

/// MongoDB 기반 게시물 리포지토리
pub struct MongoPostRepository {
    db: Arc<Database>,
}

impl MongoPostRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Post> {
        self.db.collection::<Post>(POSTS_COLLECTION)
    }

    /// 필터에 맞는 게시물을 `_id` 오름차순으로 조회합니다.
    async fn find_ordered(&self, filter: Document, page: Option<PageRequest>) -> AppResult<Vec<Post>> {
        let mut options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        if let Some(page) = page {
            let Some((skip, limit)) = page_window(page) else {
                return Ok(Vec::new());
            };
            options.skip = Some(skip);
            options.limit = Some(limit);
        }

        let cursor = self
            .collection()
            .find(filter)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// `user_id` 조회용 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id_idx".to_string()).build())
            .build();

        self.collection()
            .create_index(user_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create(&self, mut post: Post) -> AppResult<Post> {
        post.id = mongo_support::next_sequence(&self.db, POSTS_COLLECTION).await?;

        self.collection()
            .insert_one(&post)
            .await
            .map_err(mongo_support::map_write_error)?;

        Ok(post)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Post>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn list_paged(&self, page: PageRequest) -> AppResult<Vec<Post>> {
        self.find_ordered(doc! {}, Some(page)).await
    }

    async fn list_by_user_paged(&self, user_id: i32, page: PageRequest) -> AppResult<Vec<Post>> {
        self.find_ordered(doc! { "user_id": user_id }, Some(page)).await
    }

    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Post>> {
        self.find_ordered(doc! { "user_id": user_id }, None).await
    }

    async fn update(&self, post: &Post) -> AppResult<bool> {
        let result = self
            .collection()
            .replace_one(doc! { "_id": post.id }, post)
            .await
            .map_err(mongo_support::map_write_error)?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
