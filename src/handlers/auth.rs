//! # Authentication HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/v1/auth/register` | 회원 가입 | 201, 400, 409 |
//! | `POST` | `/v1/auth/login` | 토큰 발급 | 200, 400 |

use actix_web::{http::header, post, web, HttpResponse};
use crate::domain::dto::{LoginRequest, RegisterUserRequest, UserResponse};
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// 회원 가입
///
/// ```bash
/// curl -X POST http://localhost:8080/v1/auth/register \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann","email":"a@x.com","nickname":"ann","birthDay":"1990-01-01","icon":"i.png","userDescription":"hi"}'
/// ```
#[post("/register")]
pub async fn register(
    auth_service: web::Data<AuthService>,
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = auth_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/users/{}", user.id)))
        .json(UserResponse::from(user)))
}

/// 로그인
///
/// 성공 시 `{tokenAuth, message, userId}`를 반환합니다.
#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token = auth_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(token))
}
