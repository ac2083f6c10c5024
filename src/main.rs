//! test-passport 메인 애플리케이션
//!
//! 설정을 읽고 사용자 레지스트리와 인증 서비스를 만든 뒤
//! 쿠키 세션 기반의 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use test_passport::config::{CliArgs, Settings};
use test_passport::repositories::users::Users;
use test_passport::routes::configure_all_routes;
use test_passport::services::auth::{AuthService, FederatedProviders, SessionService};
use test_passport::services::users::seed_users;
use test_passport::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let cli = CliArgs::parse();
    let settings = Settings::load(&cli).map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("🚀 test-passport 시작중...");

    let users = Arc::new(Users::new());
    seed_users(&users).map_err(|e| io::Error::other(e.to_string()))?;

    let providers = FederatedProviders::from_settings(&settings.auth_providers)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let auth_service = AuthService::new(users.clone(), providers);

    print_startup_summary(
        &settings.bind_address(),
        users.len(),
        &auth_service.enabled_providers(),
    );

    start_http_server(settings, users, auth_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    settings: Settings,
    users: Arc<Users>,
    auth_service: AuthService,
) -> io::Result<()> {
    let bind_address = settings.bind_address();
    let session_key = settings.session_key();
    let static_files_dir = settings.static_files_dir.clone();

    let users = web::Data::from(users);
    let auth_service = web::Data::new(auth_service);

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(users.clone())
            .app_data(auth_service.clone())
            .wrap(SessionService::middleware(session_key.clone()))
            .wrap(middleware::Logger::default())
            .configure(|cfg| configure_all_routes(cfg, static_files_dir.as_deref()))
    })
        .bind(&bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" | "dev" => {
            let file = format!(".env.{}", profile);
            if dotenv::from_filename(&file).is_err() {
                dotenv().ok();
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
