//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 본문/경로/쿼리를 추출해 서비스에 넘기고,
//! 결과를 상태 코드와 JSON 본문으로 바꾸는 일만 합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 규칙                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB / 인메모리              ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`auth`] - `/v1/auth` 회원 가입, 로그인 (공개)
//! - [`posts`] - `/v1/posts` 게시물 CRUD (베어러 토큰 필요)
//! - [`users`] - `/v1/users` 사용자 조회/수정/삭제 (베어러 토큰 필요)
//!
//! 서비스 에러는 `?`로 전파되어 [`AppError`](crate::errors::AppError)의
//! `ResponseError` 구현이 `{"error": "..."}` 응답으로 바꿉니다.

pub mod auth;
pub mod posts;
pub mod users;
