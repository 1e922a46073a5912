//! 데이터베이스 연결 설정 모듈
//!
//! MongoDB Atlas 클러스터 접속 정보를 환경 변수에서 읽어옵니다.
//! 자격 증명이 없으면 서비스가 동작할 수 없으므로 시작 단계에서 실패합니다.

use std::env;
use crate::errors::AppError;

/// 기본 Atlas 클러스터 호스트
pub const DEFAULT_CLUSTER: &str = "cluster0.olkic.mongodb.net";

/// 기본 데이터베이스 이름
pub const DEFAULT_DATABASE_NAME: &str = "Job-Portal";

/// MongoDB 연결 설정
///
/// ## 환경 변수
///
/// - `DB_USER`, `DB_PASS`: Atlas 자격 증명 (필수)
/// - `DB_CLUSTER`: 클러스터 호스트 (기본값: `cluster0.olkic.mongodb.net`)
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: `Job-Portal`)
/// - `MONGODB_URI`: 전체 연결 URI. 설정되면 위 자격 증명 대신 사용합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let config = DatabaseConfig::from_env()?;
/// let database = Database::connect(&config).await?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// 드라이버에 전달할 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
}

impl DatabaseConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 구성합니다.
    ///
    /// 빈 문자열은 설정되지 않은 것으로 취급합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_name = get("DATABASE_NAME")
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        if let Some(uri) = get("MONGODB_URI") {
            return Ok(Self { uri, database_name });
        }

        let user = get("DB_USER")
            .ok_or_else(|| AppError::ConfigError("DB_USER is not set".to_string()))?;
        let password = get("DB_PASS")
            .ok_or_else(|| AppError::ConfigError("DB_PASS is not set".to_string()))?;
        let cluster = get("DB_CLUSTER").unwrap_or_else(|| DEFAULT_CLUSTER.to_string());

        Ok(Self {
            uri: Self::atlas_uri(&user, &password, &cluster),
            database_name,
        })
    }

    /// Atlas SRV 연결 URI를 만듭니다. 자격 증명은 퍼센트 인코딩됩니다.
    pub fn atlas_uri(user: &str, password: &str, cluster: &str) -> String {
        format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
            urlencoding::encode(user),
            urlencoding::encode(password),
            cluster
        )
    }
}
