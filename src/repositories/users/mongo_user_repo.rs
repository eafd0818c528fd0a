//! # MongoDB 사용자 리포지토리
//!
//! - **컬렉션**: `users` (`_id`는 `counters.users` 시퀀스로 발급되는 정수)
//! - **인덱스**: name(unique), email(unique), nickname(unique)

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    db::Database,
    domain::entities::{Post, User},
    errors::{AppError, AppResult},
};
use super::user_repo::UserRepository;
use crate::repositories::{mongo_support, POSTS_COLLECTION, USERS_COLLECTION};

/// MongoDB 기반 사용자 리포지토리
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(USERS_COLLECTION)
    }

    async fn exists(&self, field: &str, value: &str) -> AppResult<bool> {
        let count = self
            .collection()
            .count_documents(doc! { field: value })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    /// 유니크 인덱스를 생성합니다.
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 중복 데이터가 있으면 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let unique_index = |field: &str, name: &str| {
            IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name(name.to_string())
                        .build(),
                )
                .build()
        };

        self.collection()
            .create_indexes([
                unique_index("name", "name_unique"),
                unique_index("email", "email_unique"),
                unique_index("nickname", "nickname_unique"),
            ])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        user.id = mongo_support::next_sequence(&self.db, USERS_COLLECTION).await?;

        self.collection()
            .insert_one(&user)
            .await
            .map_err(mongo_support::map_write_error)?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        self.exists("name", name).await
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.exists("email", email).await
    }

    async fn exists_by_nickname(&self, nickname: &str) -> AppResult<bool> {
        self.exists("nickname", nickname).await
    }

    async fn update(&self, user: &User) -> AppResult<bool> {
        let result = self
            .collection()
            .replace_one(doc! { "_id": user.id }, user)
            .await
            .map_err(mongo_support::map_write_error)?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        // 트랜잭션 없이 게시물을 먼저 지워 고아 게시물이 남지 않게 한다
        self.db
            .collection::<Post>(POSTS_COLLECTION)
            .delete_many(doc! { "user_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
