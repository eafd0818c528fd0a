//! Botter 백엔드
//!
//! 짧은 글을 올리고 읽는 소셜 포스팅 서비스의 HTTP 백엔드입니다.
//! 회원 가입 후 이메일/닉네임 확인으로 베어러 토큰을 발급받고,
//! 그 토큰으로 게시물과 사용자 리소스에 접근합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 가입, 조회, 닉네임/자기소개 수정, 탈퇴 (게시물 연쇄 삭제)
//! - **게시물**: 작성, 페이지 단위 목록(`skip`/`take`), 수정, 삭제
//! - **토큰 인증**: HS256 서명, 발급자/대상/만료 검증
//! - **저장소 선택**: MongoDB 또는 인메모리 (`STORAGE` 환경 변수)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository / PostRepository trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB/In-Mem  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```bash
//! # 인메모리 저장소로 실행
//! STORAGE=memory JWT_KEY=local-secret cargo run
//!
//! # MongoDB로 실행
//! MONGODB_URI=mongodb://localhost:27017 DATABASE_NAME=botter_dev cargo run
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
