use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::Post;

/// 게시물 작성 요청
///
/// `postId`와 `postDate`는 서버가 할당하므로 요청에 포함되어도 무시됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 100, message = "Title is required (max 100 characters)"))]
    pub title: String,

    #[validate(length(min = 1, max = 300, message = "Body is required (max 300 characters)"))]
    pub body: String,

    #[serde(default)]
    pub is_private: bool,

    #[validate(length(max = 300, message = "Files reference must be at most 300 characters"))]
    #[serde(default)]
    pub files: Option<String>,

    pub user_id: i32,
}

impl From<CreatePostRequest> for Post {
    fn from(request: CreatePostRequest) -> Self {
        Post::new(
            request.title,
            request.body,
            request.is_private,
            request.files,
            request.user_id,
        )
    }
}

/// 게시물 수정 요청
///
/// `userId`는 기존 소유자와 같아야 하며, 생략하면 0으로 간주되어 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub post_id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "Title is required (max 100 characters)"))]
    pub title: String,

    #[validate(length(min = 1, max = 300, message = "Body is required (max 300 characters)"))]
    pub body: String,

    #[serde(default)]
    pub is_private: bool,

    #[validate(length(max = 300, message = "Files reference must be at most 300 characters"))]
    #[serde(default)]
    pub files: Option<String>,

    #[serde(default)]
    pub user_id: i32,
}

impl UpdatePostRequest {
    /// 검증이 끝난 수정 내용을 게시물에 적용합니다.
    pub fn apply_to(self, post: &mut Post) {
        post.apply_content(self.title, self.body, self.is_private, self.files);
    }
}
