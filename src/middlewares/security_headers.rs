//! 보안 헤더 미들웨어
//!
//! 모든 응답에 Content-Security-Policy를 추가합니다. 같은 출처의 리소스와
//! `blob:` 워커 스크립트만 허용합니다.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; worker-src 'self' blob:;";

/// 보안 헤더를 추가하는 미들웨어를 만듭니다.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new().add((header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY))
}
