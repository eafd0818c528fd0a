//! # 인증 서비스 구현
//!
//! 회원 가입과 로그인을 담당합니다. 비밀번호 대신 이메일 확인 입력과
//! 닉네임 일치 여부로 본인을 확인한 뒤 [`TokenService`]로 토큰을 발급합니다.
//!
//! ## 처리 순서
//!
//! ```text
//! register: 입력 검증 → name/email/nickname 중복 검사 → 저장
//! login:    이메일 확인 일치 → 이메일로 조회 → 닉네임 비교 → 토큰 발급
//! ```

use std::sync::Arc;
use crate::{
    domain::{
        dto::{LoginRequest, RegisterUserRequest},
        entities::User,
        models::token::Token,
    },
    errors::{AppError, AppResult},
    repositories::UserRepository,
    utils::ensure_valid,
};
use super::token_service::TokenService;

/// 회원 가입/로그인 서비스
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필드 누락/형식 오류, 2010년 이후 출생
    /// * `AppError::ConflictError` - 이름, 이메일, 닉네임 중복 (이 순서로 검사)
    pub async fn register(&self, request: RegisterUserRequest) -> AppResult<User> {
        ensure_valid(&request)?;

        if self.users.exists_by_name(&request.name).await? {
            return Err(AppError::ConflictError("This user name already exists".to_string()));
        }
        if self.users.exists_by_email(&request.email).await? {
            return Err(AppError::ConflictError("This user email already exists".to_string()));
        }
        if self.users.exists_by_nickname(&request.nickname).await? {
            return Err(AppError::ConflictError("This user nickname already exists".to_string()));
        }

        let created = self.users.create(User::from(request)).await?;
        log::info!("사용자 등록 완료: id={}, nickname={}", created.id, created.nickname);

        Ok(created)
    }

    /// 이메일/닉네임으로 본인을 확인하고 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `email`과 `confirmEmail` 불일치 (다른 검사보다 먼저)
    /// * `AppError::BadRequest` - 해당 이메일의 사용자 없음, 닉네임 불일치
    pub async fn login(&self, request: LoginRequest) -> AppResult<Token> {
        if !request.emails_match() {
            return Err(AppError::ValidationError("The emails are not equal".to_string()));
        }

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                log::warn!("로그인 실패: 등록되지 않은 이메일");
                AppError::BadRequest("Not found a user with that email".to_string())
            })?;

        if user.nickname != request.nickname {
            log::warn!("로그인 실패: 닉네임 불일치 (user_id={})", user.id);
            return Err(AppError::BadRequest("No user found with that nickname".to_string()));
        }

        self.tokens.issue_token(user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::config::JwtConfig;
    use crate::repositories::InMemoryStore;

    fn service() -> AuthService {
        let tokens = TokenService::new(JwtConfig::new("test-key", "botter-api", "botter-clients"));
        AuthService::new(Arc::new(InMemoryStore::new()), Arc::new(tokens))
    }

    fn ann() -> RegisterUserRequest {
        RegisterUserRequest {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            nickname: "ann".to_string(),
            birth_day: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            icon: "i.png".to_string(),
            user_description: "hi".to_string(),
        }
    }

    fn login(email: &str, confirm: &str, nickname: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            confirm_email: confirm.to_string(),
            nickname: nickname.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_assigns_id_and_echoes_fields() {
        let service = service();

        let user = service.register(ann()).await.unwrap();

        assert!(user.id > 0);
        assert_eq!(user.name, "Ann");
        assert_eq!(user.nickname, "ann");
    }

    #[actix_web::test]
    async fn test_register_conflicts_are_checked_in_order() {
        let service = service();
        service.register(ann()).await.unwrap();

        let mut same_email = ann();
        same_email.name = "Other".to_string();
        same_email.nickname = "other".to_string();
        match service.register(same_email).await {
            Err(AppError::ConflictError(msg)) => assert_eq!(msg, "This user email already exists"),
            other => panic!("Expected ConflictError, got {:?}", other),
        }

        match service.register(ann()).await {
            Err(AppError::ConflictError(msg)) => assert_eq!(msg, "This user name already exists"),
            other => panic!("Expected ConflictError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_register_rejects_young_user() {
        let service = service();
        let mut young = ann();
        young.birth_day = NaiveDate::from_ymd_opt(2015, 5, 5).unwrap();

        assert!(matches!(
            service.register(young).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_login_email_mismatch_is_validation_error() {
        let service = service();

        assert!(matches!(
            service.login(login("a@x.com", "b@x.com", "ann")).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_login_unknown_email_and_wrong_nickname() {
        let service = service();
        service.register(ann()).await.unwrap();

        match service.login(login("z@x.com", "z@x.com", "ann")).await {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Not found a user with that email"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }

        assert!(matches!(
            service.login(login("a@x.com", "a@x.com", "bob")).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[actix_web::test]
    async fn test_login_issues_token_for_user() {
        let service = service();
        let user = service.register(ann()).await.unwrap();

        let token = service.login(login("a@x.com", "a@x.com", "ann")).await.unwrap();

        assert_eq!(token.user_id, user.id);
        assert!(!token.token_auth.is_empty());
    }
}
