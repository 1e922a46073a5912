//! API 라우트 설정 모듈
//!
//! 엔드포인트들을 리소스별로 그룹화하여 등록합니다.
//! 서비스(`web::Data<JobService>`, `web::Data<JobApplicationService>`)는
//! `App` 구성 시 `app_data`로 먼저 등록되어 있어야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(job_service))
//!     .app_data(web::Data::new(job_application_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use crate::domain::dto::MessageResponse;
use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 오류도 `{"error": "..."}` 형식의 400으로 응답하도록
/// `JsonConfig`를 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );

    cfg.service(welcome);

    configure_job_routes(cfg);
    configure_job_application_routes(cfg);
}

/// 채용 공고 라우트
///
/// - `GET /jobs` - 공고 목록 (`?email=` 필터)
/// - `GET /jobs/{job_id}` - 공고 단건 조회
/// - `POST /jobs` - 공고 생성
fn configure_job_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/jobs")
            .service(handlers::jobs::list_jobs)
            .service(handlers::jobs::create_job)
            .service(handlers::jobs::get_job),
    );
}

/// 지원서 라우트
///
/// - `POST /job-applications` - 지원서 제출
/// - `GET /job-applications` - 전체 지원서 조회
/// - `PATCH /job-applications/{application_id}` - 상태 변경
fn configure_job_application_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/job-applications")
            .service(handlers::job_applications::create_job_application)
            .service(handlers::job_applications::list_job_applications)
            .service(handlers::job_applications::update_job_application_status),
    );
}

/// 환영 메시지를 반환하는 루트 엔드포인트
///
/// ```bash
/// curl http://localhost:5000/
/// ```
///
/// Response:
/// ```json
/// { "message": "Welcome to the Job Portal API" }
/// ```
#[get("/")]
async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Welcome to the Job Portal API".to_string(),
    })
}
