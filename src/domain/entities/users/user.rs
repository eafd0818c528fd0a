//! 사용자 엔티티
//!
//! `users` 컬렉션에 저장되는 사용자 레코드입니다.
//! 게시물과의 1:N 관계는 [`Post::user_id`](crate::domain::entities::posts::post::Post::user_id)
//! 쪽에서만 표현하며, 사용자 레코드는 게시물 목록을 직접 보관하지 않습니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 사용자 레코드
///
/// `name`과 `email`은 생성 이후 변경할 수 없고,
/// `nickname`과 `user_description`만 수정 가능합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 할당하는 양의 정수 ID (저장 전에는 0)
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub nickname: String,
    pub birth_day: NaiveDate,
    /// 아이콘 이미지 참조 (URL 또는 경로)
    pub icon: String,
    pub user_description: String,
}

impl User {
    /// 아직 저장되지 않은 새 사용자를 생성합니다.
    pub fn new(
        name: String,
        email: String,
        nickname: String,
        birth_day: NaiveDate,
        icon: String,
        user_description: String,
    ) -> Self {
        Self {
            id: 0,
            name,
            email,
            nickname,
            birth_day,
            icon,
            user_description,
        }
    }

    /// 변경 가능한 프로필 필드를 덮어씁니다.
    pub fn apply_profile(&mut self, nickname: String, user_description: String) {
        self.nickname = nickname;
        self.user_description = user_description;
    }
}
