use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::dto::posts::PostView;
use crate::domain::entities::{Post, User};

/// 회원가입 응답 (저장된 사용자 레코드 전체)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub nickname: String,
    pub birth_day: NaiveDate,
    pub icon: String,
    pub user_description: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            nickname,
            birth_day,
            icon,
            user_description,
        } = user;

        Self {
            user_id: id,
            name,
            email,
            nickname,
            birth_day,
            icon,
            user_description,
        }
    }
}

/// 사용자 공개 뷰
///
/// 게시물은 [`PostView`]로만 포함되며, 게시물 쪽은 `userId`만 갖기 때문에
/// 직렬화 시 사용자 ↔ 게시물 순환이 생기지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub nickname: String,
    pub user_description: String,
    pub posts: Vec<PostView>,
}

impl UserView {
    /// 사용자 레코드와 소유 게시물 목록으로 뷰를 구성합니다.
    pub fn from_parts(user: User, posts: Vec<Post>) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            email: user.email,
            nickname: user.nickname,
            user_description: user.user_description,
            posts: posts.into_iter().map(PostView::from).collect(),
        }
    }
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self::from_parts(user, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        let mut user = User::new(
            "Ann".to_string(),
            "a@x.com".to_string(),
            "ann1".to_string(),
            NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            "icon".to_string(),
            "desc".to_string(),
        );
        user.id = 1;
        user
    }

    #[test]
    fn test_user_response_serializes_camel_case() {
        let json = serde_json::to_value(UserResponse::from(user())).unwrap();

        assert_eq!(json["userId"], 1);
        assert_eq!(json["birthDay"], "1990-05-01");
        assert_eq!(json["userDescription"], "desc");
    }

    #[test]
    fn test_user_view_posts_carry_only_owner_id() {
        let mut post = Post::new("t".to_string(), "b".to_string(), false, None, 1);
        post.id = 7;

        let json = serde_json::to_value(UserView::from_parts(user(), vec![post])).unwrap();

        assert_eq!(json["posts"][0]["postId"], 7);
        assert_eq!(json["posts"][0]["userId"], 1);
        assert!(json["posts"][0].get("user").is_none());
        assert!(json.get("birthDay").is_none());
    }
}
