//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! - [`cors`] - Origin 허용 목록 기반 CORS (`actix-cors`)
//! - [`security_headers`] - Content-Security-Policy 헤더
//!
//! 요청 로그(`middleware::Logger`)와 경로 정규화(`middleware::NormalizePath`)는
//! actix-web 기본 미들웨어를 `main`에서 직접 등록합니다.
//!
//! ## 글로벌 미들웨어 등록
//! ```rust,ignore
//! App::new()
//!     .wrap(security_headers())
//!     .wrap(configure_cors(&CorsConfig::allowed_origins()?))
//!     .configure(configure_all_routes)
//! ```

pub mod cors;
pub mod security_headers;

pub use cors::configure_cors;
pub use security_headers::security_headers;
