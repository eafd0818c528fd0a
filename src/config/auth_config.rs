//! 인증 관련 설정
//!
//! JWT 서명 키, 발급자(issuer), 대상(audience), 만료 시간을 환경 변수에서 읽어옵니다.
//! 토큰 발급과 검증은 항상 같은 [`JwtConfig`] 값을 사용해야 합니다.
//!
//! ```bash
//! JWT_KEY=change-me-to-a-long-random-secret
//! JWT_ISSUER=botter-api
//! JWT_AUDIENCE=botter-clients
//! JWT_EXPIRATION_HOURS=24
//! ```

use std::env;

/// 토큰 기본 유효 시간 (시간 단위)
pub const DEFAULT_TOKEN_LIFETIME_HOURS: i64 = 24;

/// JWT 발급/검증 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 대칭 서명 키
    pub secret: String,
    /// `iss` 클레임 값
    pub issuer: String,
    /// `aud` 클레임 값
    pub audience: String,
    /// 발급 시점부터의 유효 시간
    pub expiration_hours: i64,
}

impl JwtConfig {
    pub fn new(secret: &str, issuer: &str, audience: &str) -> Self {
        Self {
            secret: secret.to_string(),
            issuer: issuer.to_string(),
            audience: audience.to_string(),
            expiration_hours: DEFAULT_TOKEN_LIFETIME_HOURS,
        }
    }

    /// 환경 변수에서 JWT 설정을 로드합니다.
    pub fn from_env() -> Self {
        Self {
            secret: Self::secret(),
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "botter-api".to_string()),
            audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| "botter-clients".to_string()),
            expiration_hours: Self::expiration_hours(),
        }
    }

    fn secret() -> String {
        env::var("JWT_KEY").unwrap_or_else(|_| {
            log::warn!("JWT_KEY not set, using default (not secure for production!)");
            "botter-development-signing-key".to_string()
        })
    }

    fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|hours: &i64| *hours > 0)
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_HOURS)
    }
}
