//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256으로 서명된 베어러 토큰을 발급하고 검증합니다.
//! 서명 키, 발급자, 대상, 유효 시간은 모두 [`JwtConfig`]에서 가져옵니다.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::domain::models::token::{Token, TokenClaims};
use crate::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// 발급된 토큰의 클레임은 `iss`, `aud`, `exp`뿐이며 사용자 ID는
/// 응답 본문의 `userId`로만 전달됩니다.
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 현재 시각 기준으로 사용자에게 토큰을 발급합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue_token(user.id)?;
    /// println!("{}", token.message);
    /// ```
    pub fn issue_token(&self, user_id: i32) -> Result<Token, AppError> {
        self.issue_token_at(user_id, Utc::now())
    }

    /// 지정한 발급 시각으로 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    pub fn issue_token_at(&self, user_id: i32, issued_at: DateTime<Utc>) -> Result<Token, AppError> {
        let expires_at = issued_at + Duration::hours(self.config.expiration_hours);

        let claims = TokenClaims {
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            exp: expires_at.timestamp(),
        };

        let token_auth = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        let message = format!(
            "New generated token at: {} - {} - User id: {}",
            issued_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            user_id
        );

        log::info!("토큰 발급: user_id={}, expires_at={}", user_id, expires_at);

        Ok(Token {
            token_auth,
            message,
            user_id,
        })
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명, 발급자, 대상, 만료 시각을 모두 확인합니다.
    /// 만료 시각에는 유예 시간을 두지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 위조, 발급자/대상 불일치, 형식 오류
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation.set_audience(&[self.config.audience.as_str()]);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("Invalid token".to_string())
                }
            })
    }

    /// `Authorization` 헤더의 "Bearer {token}" 형식에서 토큰 부분만 추출합니다.
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOiJIUzI1NiJ9...")?;
    /// let claims = token_service.verify_token(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("Invalid authorization header".to_string()))
    }
}
