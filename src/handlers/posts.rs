//! # Post HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/v1/posts` | 게시물 작성 | 201, 400 |
//! | `GET` | `/v1/posts?skip&take` | 전체 게시물 페이지 | 200 |
//! | `GET` | `/v1/posts/user/{id}?skip&take` | 사용자 게시물 페이지 | 200, 400, 404 |
//! | `PUT` | `/v1/posts/{id}` | 게시물 수정 | 200, 400, 404 |
//! | `DELETE` | `/v1/posts/{id}` | 게시물 삭제 | 204, 400, 404 |

use actix_web::{delete, get, http::header, post, put, web, HttpResponse};
use crate::domain::dto::{CreatePostRequest, PageRequest, UpdatePostRequest};
use crate::errors::AppError;
use crate::services::posts::PostService;

#[post("")]
pub async fn create_post(
    post_service: web::Data<PostService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let post = post_service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/posts/{}", post.post_id)))
        .json(post))
}

#[get("")]
pub async fn list_posts(
    post_service: web::Data<PostService>,
    page: web::Query<PageRequest>,
) -> Result<HttpResponse, AppError> {
    let posts = post_service.list_all(page.into_inner()).await?;

    Ok(HttpResponse::Ok().json(posts))
}

#[get("/user/{user_id}")]
pub async fn list_posts_by_user(
    post_service: web::Data<PostService>,
    user_id: web::Path<i32>,
    page: web::Query<PageRequest>,
) -> Result<HttpResponse, AppError> {
    let posts = post_service
        .list_by_user(user_id.into_inner(), page.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

#[put("/{post_id}")]
pub async fn update_post(
    post_service: web::Data<PostService>,
    post_id: web::Path<i32>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let post = post_service
        .update(post_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

#[delete("/{post_id}")]
pub async fn delete_post(
    post_service: web::Data<PostService>,
    post_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    post_service.delete(post_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
