use serde::{Deserialize, Serialize};

/// 로그인 요청
///
/// 비밀번호 대신 이메일 확인 입력과 닉네임으로 본인 여부를 확인합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub confirm_email: String,
    pub nickname: String,
}

impl LoginRequest {
    pub fn emails_match(&self) -> bool {
        self.email == self.confirm_email
    }
}
