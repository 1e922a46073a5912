//! CORS 정책
//!
//! 명시적인 Origin 허용 목록과 자격 증명(쿠키) 포함 요청을 허용합니다.

use actix_cors::Cors;

/// 허용 메서드 목록
pub const ALLOWED_METHODS: [&str; 6] = ["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"];

/// CORS 설정을 구성합니다
///
/// # Arguments
///
/// * `allowed_origins` - 허용할 Origin 목록 (`CorsConfig::allowed_origins()`)
///
/// # Examples
///
/// ```rust,ignore
/// let cors = configure_cors(&CorsConfig::allowed_origins()?);
/// App::new().wrap(cors)
/// ```
pub fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(ALLOWED_METHODS)
        .allow_any_header()
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
