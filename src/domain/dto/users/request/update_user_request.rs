use serde::{Deserialize, Serialize};
use validator::Validate;

/// 사용자 수정 요청
///
/// `name`과 `email`은 변경할 수 없으므로 저장된 값과 동일하게 보내야 합니다.
/// 값을 생략하면 변경 시도로 간주됩니다. `userId`와 `posts`는 무시됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub user_id: Option<i32>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 80, message = "Nickname is required (max 80 characters)"))]
    pub nickname: String,

    #[validate(length(min = 1, max = 250, message = "Description is required (max 250 characters)"))]
    pub user_description: String,
}

impl UpdateUserRequest {
    /// 불변 필드(name, email)를 바꾸려 하는지 확인합니다.
    pub fn changes_identity(&self, name: &str, email: &str) -> bool {
        self.name.as_deref() != Some(name) || self.email.as_deref() != Some(email)
    }
}
