//! Botter 백엔드 실행 진입점
//!
//! 환경 변수 로드 → 로깅 초기화 → 저장소 선택 및 서비스 조립 → HTTP 서버 실행 순서로 동작합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use botter_backend::config::{
    DatabaseConfig, Environment, JwtConfig, RateLimitConfig, ServerConfig, StorageBackend,
};
use botter_backend::core::ServiceContainer;
use botter_backend::db::Database;
use botter_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let environment = Environment::current();
    info!("🚀 Botter 백엔드 시작중... ({:?})", environment);

    let container = build_container().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    if environment.is_production() && container.storage() == StorageBackend::Memory.as_str() {
        warn!("운영 환경에서 인메모리 저장소를 사용 중입니다. 재시작 시 데이터가 사라집니다");
    }

    container.print_summary();
    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    let result = start_http_server(container).await;

    info!("👋 서버 종료");
    log::logger().flush();

    result
}

async fn build_container() -> Result<ServiceContainer, botter_backend::errors::AppError> {
    let jwt = JwtConfig::from_env();

    match DatabaseConfig::storage() {
        StorageBackend::Memory => {
            info!("💾 인메모리 저장소 사용");
            Ok(ServiceContainer::in_memory(jwt))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(Database::new().await?);
            ServiceContainer::mongodb(database, jwt).await
        }
    }
}

async fn start_http_server(container: ServiceContainer) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let container = container.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| container.configure(cfg))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 표준 출력으로 남긴다
    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => println!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => println!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            println!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::LOCATION])
        .max_age(3600)
}
