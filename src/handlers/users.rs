//! # User Management HTTP Handlers
//!
//! 가입 이후의 사용자 리소스를 다룹니다. 가입은 `/v1/auth/register`에서 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/v1/users/{id}` | 사용자와 게시물 조회 | 200, 400, 404 |
//! | `PUT` | `/v1/users/{id}` | 닉네임/자기소개 수정 | 200, 400, 404, 409 |
//! | `DELETE` | `/v1/users/{id}` | 사용자와 게시물 삭제 | 204, 400, 404 |

use actix_web::{delete, get, put, web, HttpResponse};
use crate::domain::dto::UpdateUserRequest;
use crate::errors::AppError;
use crate::services::users::UserService;

#[get("/{user_id}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_one(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 요청 본문의 `name`과 `email`은 저장된 값과 같아야 합니다.
#[put("/{user_id}")]
pub async fn update_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<i32>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = user_service
        .update(user_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    user_service.delete(user_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
