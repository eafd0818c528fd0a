//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 핸들러보다 먼저 실행되는 횡단 관심사를 제공합니다.
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더 추출
//! - 서명, 발급자, 대상, 만료 시각 검증
//! - 검증된 토큰 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(token_service.clone())
//!     .service(
//!         web::scope("/v1/posts")
//!             .wrap(AuthMiddleware::new()) // 토큰 없으면 핸들러 실행 전에 401
//!             .service(handlers::posts::list_posts)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
