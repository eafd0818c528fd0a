use chrono::{DateTime, Utc};
use crate::domain::models::token::TokenClaims;

/// 인증 미들웨어가 검증을 마친 베어러 토큰 정보
///
/// 요청 extensions에 저장됩니다.
///
/// 토큰에 사용자 클레임이 없으므로 발급자/대상/만료 시각만 담습니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedToken {
    pub issuer: String,
    pub audience: String,
    pub expires_at: DateTime<Utc>,
}

impl From<TokenClaims> for AuthenticatedToken {
    fn from(claims: TokenClaims) -> Self {
        Self {
            issuer: claims.iss,
            audience: claims.aud,
            expires_at: DateTime::from_timestamp(claims.exp, 0).unwrap_or_default(),
        }
    }
}
