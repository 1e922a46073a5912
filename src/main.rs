//! 채용 포털 API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결을 설정하고 채용 공고/지원서 REST API를 제공합니다.

use std::process;
use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use job_portal_api::config::{CorsConfig, DatabaseConfig, ServerConfig};
use job_portal_api::db::Database;
use job_portal_api::middlewares::{configure_cors, security_headers};
use job_portal_api::repositories::{MongoJobApplicationRepository, MongoJobRepository};
use job_portal_api::routes::configure_all_routes;
use job_portal_api::services::{JobApplicationService, JobService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("Starting job portal API...");

    let allowed_origins = match CorsConfig::allowed_origins() {
        Ok(origins) => origins,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let database = initialize_database().await;

    let result = start_http_server(&database, allowed_origins).await;

    // 서버가 멈춘 뒤 연결 정리
    database.shutdown().await;

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 서비스는 워커 간에 공유되도록 `web::Data`로 한 번만 만들어 등록합니다.
/// SIGINT/SIGTERM을 받으면 actix-web이 진행 중인 요청을 마무리한 뒤 반환합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    database: &Database,
    allowed_origins: Vec<String>,
) -> std::io::Result<()> {
    let jobs = Arc::new(MongoJobRepository::new(database));
    let applications = Arc::new(MongoJobApplicationRepository::new(database));

    let job_service = web::Data::new(JobService::new(jobs.clone()));
    let job_application_service =
        web::Data::new(JobApplicationService::new(applications, jobs));

    info!("CORS allowed origins: {:?}", allowed_origins);

    let port = ServerConfig::port();
    let bind_address = (ServerConfig::host(), port);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(job_service.clone())
            .app_data(job_application_service.clone())
            .wrap(security_headers())
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?;

    info!("Server running at http://localhost:{}", port);

    server.run().await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 파일이 없으면 프로세스 환경 변수만 사용합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타/미설정 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod loaded"),
            Err(e) => error!("Failed to load .env.prod: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev loaded"),
            Err(e) => error!("Failed to load .env.dev: {}", e),
        },
        _ => {
            if dotenv().is_ok() {
                info!(".env loaded");
            }
        }
    }
}

/// 기본 로그 필터
const DEFAULT_LOG_FILTER: &str = "info,actix_web=info";

/// 로깅 시스템을 초기화합니다
///
/// `.env` 파일의 `RUST_LOG`도 반영되도록 `load_env_file` 이후에 호출해야 합니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=job_portal_api=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(logging_env("RUST_LOG"));
}

fn logging_env(filter_var: &str) -> Env<'_> {
    Env::default().filter_or(filter_var, DEFAULT_LOG_FILTER)
}

/// MongoDB 연결을 초기화합니다
///
/// 설정 누락이나 연결 실패는 복구할 수 없으므로 로그를 남기고 종료 코드 1로 끝냅니다.
async fn initialize_database() -> Database {
    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    match Database::connect(&config).await {
        Ok(database) => database,
        Err(e) => {
            error!("MongoDB connection failed: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_log_filter_from_env_file() {
        let var = "JOB_PORTAL_API_TEST_LOG";
        let path = std::env::temp_dir().join(format!("job_portal_api_{}.env", std::process::id()));
        std::fs::write(&path, format!("{}=debug\n", var)).unwrap();

        dotenv::from_path(&path).unwrap();
        let logger = env_logger::Builder::from_env(logging_env(var)).build();
        std::fs::remove_file(&path).ok();

        assert_eq!(logger.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_default_log_filter() {
        let logger = env_logger::Builder::from_env(logging_env("JOB_PORTAL_API_UNSET_LOG")).build();

        assert_eq!(logger.filter(), LevelFilter::Info);
    }
}
