//! 서비스 컨테이너
//!
//! 전역 싱글톤 없이 생성자 주입으로 컴포넌트를 조립합니다.
//! 조립 순서는 `리포지토리 → TokenService → 도메인 서비스`이며,
//! 결과는 `Clone` 가능한 컨테이너 하나로 묶여 각 워커에 복제됩니다.

use std::sync::Arc;
use actix_web::web;
use crate::{
    config::JwtConfig,
    db::Database,
    errors::AppResult,
    repositories::{
        InMemoryStore, MongoPostRepository, MongoUserRepository, PostRepository, UserRepository,
    },
    services::{
        auth::{AuthService, TokenService},
        posts::PostService,
        users::UserService,
    },
    utils::display_terminal::{print_boxed_title, print_final_summary, print_sub_task},
};

const REPOSITORY_COUNT: usize = 2;
const SERVICE_COUNT: usize = 4;

/// 요청 핸들러가 사용하는 서비스 묶음
#[derive(Clone)]
pub struct ServiceContainer {
    pub auth: web::Data<AuthService>,
    pub posts: web::Data<PostService>,
    pub users: web::Data<UserService>,
    pub tokens: web::Data<TokenService>,
    storage: &'static str,
}

impl ServiceContainer {
    /// 주어진 리포지토리로 모든 서비스를 생성합니다.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        jwt: JwtConfig,
        storage: &'static str,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(jwt));

        Self {
            auth: web::Data::new(AuthService::new(user_repo.clone(), tokens.clone())),
            posts: web::Data::new(PostService::new(post_repo.clone(), user_repo.clone())),
            users: web::Data::new(UserService::new(user_repo, post_repo)),
            tokens: web::Data::from(tokens),
            storage,
        }
    }

    /// 인메모리 저장소 기반 컨테이너 (테스트, `STORAGE=memory`)
    pub fn in_memory(jwt: JwtConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store, jwt, "memory")
    }

    /// MongoDB 기반 컨테이너. 필요한 인덱스를 먼저 생성합니다.
    pub async fn mongodb(database: Arc<Database>, jwt: JwtConfig) -> AppResult<Self> {
        log::info!("💾 MongoDB 저장소 사용: {}", database.database_name());

        let user_repo = MongoUserRepository::new(database.clone());
        let post_repo = MongoPostRepository::new(database);

        user_repo.create_indexes().await?;
        post_repo.create_indexes().await?;

        Ok(Self::new(Arc::new(user_repo), Arc::new(post_repo), jwt, "mongodb"))
    }

    /// 모든 서비스를 애플리케이션 데이터로 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.auth.clone())
            .app_data(self.posts.clone())
            .app_data(self.users.clone())
            .app_data(self.tokens.clone());
    }

    pub fn storage(&self) -> &'static str {
        self.storage
    }

    /// 구성 결과를 터미널에 출력합니다.
    pub fn print_summary(&self) {
        print_boxed_title("📦 COMPONENTS");
        print_sub_task("UserRepository", self.storage);
        print_sub_task("PostRepository", self.storage);
        print_sub_task("TokenService", "HS256");
        print_sub_task("AuthService", "ready");
        print_sub_task("PostService", "ready");
        print_sub_task("UserService", "ready");
        print_final_summary(self.storage, REPOSITORY_COUNT, SERVICE_COUNT);
    }
}
