//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수(또는 `PROFILE`에 따라 로드되는 `.env` 파일)에서 읽으며
//! 코드에 하드코딩하지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, Rate Limiting 설정
//! - [`auth_config`] - JWT 서명 키, 발급자, 대상, 만료 시간
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let bind = ServerConfig::bind_address();
//! let storage = DatabaseConfig::storage();
//! let jwt = JwtConfig::from_env();
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
