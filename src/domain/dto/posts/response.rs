use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::Post;

/// 게시물 공개 뷰
///
/// 소유자는 `userId`로만 표현합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub post_id: i32,
    pub title: String,
    pub body: String,
    pub is_private: bool,
    pub post_date: DateTime<Utc>,
    pub files: Option<String>,
    pub user_id: i32,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.id,
            title: post.title,
            body: post.body,
            is_private: post.is_private,
            post_date: post.post_date,
            files: post.files,
            user_id: post.user_id,
        }
    }
}

impl From<PostView> for Post {
    fn from(view: PostView) -> Self {
        Self {
            id: view.post_id,
            title: view.title,
            body: view.body,
            is_private: view.is_private,
            post_date: view.post_date,
            files: view.files,
            user_id: view.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_view_round_trip_preserves_fields() {
        let mut post = Post::new("t".to_string(), "b".to_string(), true, Some("f".to_string()), 4);
        post.id = 2;

        let view = PostView::from(post.clone());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["isPrivate"], true);
        assert_eq!(json["userId"], 4);

        assert_eq!(Post::from(view), post);
    }
}
