//! 서버 바인딩 및 CORS 설정

use std::env;
use crate::errors::AppError;

/// 기본 포트
pub const DEFAULT_PORT: u16 = 5000;

/// 기본으로 허용하는 프론트엔드 Origin 목록
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "https://job-portal2-efa9b.web.app",
    "https://job-portal2-efa9b.firebaseapp.com",
];

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 5000
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        Self::parse_port(env::var("PORT").ok().as_deref())
    }

    /// 포트 문자열을 해석합니다. 없거나 잘못된 값이면 기본 포트를 사용합니다.
    pub fn parse_port(value: Option<&str>) -> u16 {
        value
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - `*` 또는 스킴이 없는 Origin이 포함된 경우
    pub fn allowed_origins() -> Result<Vec<String>, AppError> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    /// Origin 목록을 해석합니다. 비어 있으면 기본 목록을 사용합니다.
    ///
    /// 자격 증명을 허용하므로 와일드카드는 받지 않습니다.
    pub fn parse_origins(value: Option<&str>) -> Result<Vec<String>, AppError> {
        let origins: Vec<String> = value
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            return Ok(DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect());
        }

        if let Some(invalid) = origins.iter().find(|origin| !Self::is_valid_origin(origin)) {
            return Err(AppError::ConfigError(format!(
                "CORS_ALLOWED_ORIGINS contains an invalid origin: {}",
                invalid
            )));
        }

        Ok(origins)
    }

    fn is_valid_origin(origin: &str) -> bool {
        ["http://", "https://"]
            .iter()
            .filter_map(|scheme| origin.strip_prefix(scheme))
            .any(|host| !host.is_empty() && !host.contains('*'))
    }
}
