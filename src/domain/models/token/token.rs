use serde::{Deserialize, Serialize};

/// JWT 클레임
///
/// 서명된 페이로드에는 발급자, 대상, 만료 시각만 포함됩니다.
/// 사용자 ID는 응답 본문([`Token::user_id`])으로만 전달되므로,
/// 토큰만으로는 요청자가 어느 사용자인지 증명할 수 없습니다.
/// 사용자별 리소스 권한 검사는 이 토큰으로 할 수 없다는 점에 유의해야 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iss: String,
    pub aud: String,
    pub exp: i64,
}

/// 로그인 성공 시 발급되는 토큰 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// 서명된 JWT 문자열
    pub token_auth: String,
    /// 발급/만료 시각과 사용자 ID를 담은 안내 메시지
    pub message: String,
    pub user_id: i32,
}
