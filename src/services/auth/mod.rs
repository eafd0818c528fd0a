//! 인증 서비스 모듈
//!
//! - [`TokenService`] - HS256 베어러 토큰 발급/검증
//! - [`AuthService`] - 회원 가입과 로그인
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let tokens = Arc::new(TokenService::new(JwtConfig::from_env()));
//! let auth = AuthService::new(user_repo.clone(), tokens.clone());
//! let token = auth.login(request).await?;
//! ```

pub mod token_service;
pub mod auth_service;

pub use token_service::TokenService;
pub use auth_service::AuthService;
