//! JWT 인증 미들웨어
//!
//! 보호된 스코프의 모든 요청에서 베어러 토큰을 검증합니다.
//! 검증에 쓰는 [`TokenService`](crate::services::auth::TokenService)는
//! 애플리케이션 데이터(`web::Data<TokenService>`)에서 가져옵니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 토큰이 없거나 유효하지 않으면 핸들러를 호출하지 않고 401을 반환합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpMessage, HttpRequest, HttpResponse};
    use crate::config::JwtConfig;
    use crate::domain::models::auth::AuthenticatedToken;
    use crate::services::auth::TokenService;

    async fn protected(req: HttpRequest) -> HttpResponse {
        match req.extensions().get::<AuthenticatedToken>() {
            Some(token) => HttpResponse::Ok().body(token.issuer.clone()),
            None => HttpResponse::InternalServerError().finish(),
        }
    }

    fn token_service() -> web::Data<TokenService> {
        web::Data::new(TokenService::new(JwtConfig::new(
            "middleware-test-key",
            "botter-api",
            "botter-clients",
        )))
    }

    #[actix_web::test]
    async fn test_missing_header_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(token_service())
                .service(web::scope("/v1").wrap(AuthMiddleware::new()).route("/me", web::get().to(protected))),
        )
        .await;

        let req = test::TestRequest::get().uri("/v1/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let tokens = token_service();
        let token = tokens.issue_token(1).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(tokens.clone())
                .service(web::scope("/v1").wrap(AuthMiddleware::new()).route("/me", web::get().to(protected))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/v1/me")
            .insert_header(("Authorization", format!("Bearer {}", token.token_auth)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        assert_eq!(body, web::Bytes::from_static(b"botter-api"));
    }

    #[actix_web::test]
    async fn test_garbage_token_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(token_service())
                .service(web::scope("/v1").wrap(AuthMiddleware::new()).route("/me", web::get().to(protected))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/v1/me")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
