//! 게시물 엔티티

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 게시물 레코드
///
/// `id`, `post_date`, `user_id`는 생성 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: i32,
    pub title: String,
    pub body: String,
    pub is_private: bool,
    /// 서버가 생성 시점에 기록하는 UTC 시각
    pub post_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
    /// 소유 사용자 ID (users._id 참조)
    pub user_id: i32,
}

impl Post {
    /// 현재 시각을 작성 시각으로 하는 새 게시물을 생성합니다.
    pub fn new(
        title: String,
        body: String,
        is_private: bool,
        files: Option<String>,
        user_id: i32,
    ) -> Self {
        Self {
            id: 0,
            title,
            body,
            is_private,
            post_date: Utc::now(),
            files,
            user_id,
        }
    }

    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }

    /// 변경 가능한 필드(제목, 본문, 공개 여부, 첨부)를 덮어씁니다.
    pub fn apply_content(
        &mut self,
        title: String,
        body: String,
        is_private: bool,
        files: Option<String>,
    ) {
        self.title = title;
        self.body = body;
        self.is_private = is_private;
        self.files = files;
    }
}
