//! # Job Application HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/job-applications` | 지원서 제출 + 공고 지원자 수 증가 | 201 / 500 |
//! | `GET` | `/job-applications` | 전체 지원서 조회 | 200 / 500 |
//! | `PATCH` | `/job-applications/{application_id}` | 상태 변경 | 200 / 500 |

use actix_web::{get, patch, post, web, HttpResponse};
use serde_json::Value;
use crate::domain::documents;
use crate::domain::dto::UpdateStatusRequest;
use crate::errors::AppError;
use crate::services::JobApplicationService;

/// 지원서 제출 핸들러
///
/// 본문의 `job_id`가 가리키는 공고의 `applicationCount`도 1 증가합니다.
/// 일치하는 공고가 없어도 201로 응답합니다.
///
/// ```bash
/// curl -X POST http://localhost:5000/job-applications \
///   -H "Content-Type: application/json" \
///   -d '{"job_id":"65a1f0c2e4b0a1b2c3d4e5f6","applicant":"bob"}'
/// ```
#[post("")]
pub async fn create_job_application(
    service: web::Data<JobApplicationService>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let response = service.submit_application(&payload).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_job_applications(
    service: web::Data<JobApplicationService>,
) -> Result<HttpResponse, AppError> {
    let applications = service.list_applications().await?;

    Ok(HttpResponse::Ok().json(documents::to_json_array(applications)))
}

/// 지원서 상태 변경 핸들러
///
/// # 응답
///
/// 일치하는 지원서가 없어도 200이며, 결과는 갱신 집계로 확인합니다.
///
/// ```json
/// {
///   "acknowledged": true,
///   "matchedCount": 1,
///   "modifiedCount": 1,
///   "upsertedCount": 0,
///   "upsertedId": null
/// }
/// ```
#[patch("/{application_id}")]
pub async fn update_job_application_status(
    service: web::Data<JobApplicationService>,
    application_id: web::Path<String>,
    payload: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .update_status(&application_id, &payload.status)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
