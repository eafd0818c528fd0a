//! 도메인 모델 모듈
//!
//! 영속화되지 않는 인증 관련 모델을 정의합니다.
//!
//! - [`token`] - JWT 클레임과 발급 토큰 응답
//! - [`auth`] - 요청 단위로 검증된 토큰 정보

pub mod auth;
pub mod token;

pub use auth::AuthenticatedToken;
pub use token::{Token, TokenClaims};
