//! # Core Module
//!
//! 애플리케이션 구성 요소를 조립하는 모듈입니다.
//!
//! ### [`container`] - 서비스 컨테이너
//! - 저장소 구현(MongoDB/인메모리)을 선택해 리포지토리를 생성
//! - 리포지토리를 서비스 생성자에 주입
//! - 서비스들을 `web::Data`로 actix 애플리케이션에 등록
//!
//! ```rust,ignore
//! let container = ServiceContainer::in_memory(JwtConfig::from_env());
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| container.configure(cfg))
//!         .configure(routes::configure_all_routes)
//! })
//! ```

pub mod container;

pub use container::ServiceContainer;
