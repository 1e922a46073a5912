//! Database Connection Management Module
//!
//! MongoDB 연결 수명 주기를 담당하는 모듈입니다.
//! 프로세스 전체에서 하나의 [`Database`]를 만들고, 리포지토리에 명시적으로 전달합니다.
//! 커넥션 풀링은 드라이버가 처리합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use job_portal_api::config::DatabaseConfig;
//! use job_portal_api::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::from_env()?).await?;
//! let jobs = database.jobs();
//! // ... 서버 종료 후
//! database.shutdown().await;
//! ```

use log::info;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection};
use crate::config::DatabaseConfig;

/// 채용 공고 컬렉션 이름
pub const JOBS_COLLECTION: &str = "Jobs";

/// 지원서 컬렉션 이름
pub const JOB_APPLICATIONS_COLLECTION: &str = "job_applications";

/// MongoDB 데이터베이스 연결 래퍼
///
/// 클라이언트는 내부적으로 `Arc`를 사용하므로 복제 비용이 작고,
/// 여러 요청이 동시에 사용해도 안전합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// Stable API v1(strict)을 사용하며, `ping` 명령으로 연결을 검증한 뒤 반환합니다.
    /// 실패하면 호출자가 프로세스를 종료합니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        client_options.app_name = Some("job_portal_api".to_string());
        client_options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("Connected to MongoDB: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 채용 공고 컬렉션
    pub fn jobs(&self) -> Collection<Document> {
        self.get_database().collection(JOBS_COLLECTION)
    }

    /// 지원서 컬렉션
    pub fn job_applications(&self) -> Collection<Document> {
        self.get_database().collection(JOB_APPLICATIONS_COLLECTION)
    }

    /// 연결을 닫습니다.
    ///
    /// HTTP 서버가 멈춘 뒤에 호출되므로 새 요청은 더 이상 들어오지 않습니다.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB connection closed");
    }
}
