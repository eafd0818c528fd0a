//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 서비스 계층과 HTTP 계층이 공유하는 통합 에러 타입입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 각 에러를
//! 적절한 HTTP 상태 코드와 `{"error": "..."}` JSON 본문으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필드 검증 실패, 잘못된 JSON/쿼리 |
//! | `BadRequest` | 400 Bad Request | 잘못된 ID, 변경 불가 필드 변경 시도 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 이름/이메일/닉네임 중복 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 누락, 위조, 만료 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_post(id: i32) -> Result<Post, AppError> {
//!     if id <= 0 {
//!         return Err(AppError::BadRequest("Enter a valid Post ID".to_string()));
//!     }
//!
//!     post_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound(format!("Post with ID: {} not found", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 에러는 요청 단위로 종결되며 재시도나 부분 적용은 없습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 요청 자체가 잘못된 경우 (400 Bad Request)
    ///
    /// 0 이하의 ID, 소유자/이름/이메일 변경 시도, 존재하지 않는 참조 등
    /// 검증 규칙이 아닌 비즈니스 규칙 위반에 사용합니다.
    #[error("{0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 500 계열 에러는 내부 메시지를 그대로 노출하지 않고 로그에만 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            log::error!("요청 처리 중 서버 에러: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": message
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
