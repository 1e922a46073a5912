//! # Job Posting HTTP Handlers
//!
//! 채용 공고 조회/생성 엔드포인트입니다. 라우트 등록은 [`crate::routes`]에서 합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/jobs` | 공고 목록 (`?email=` 필터) | 200 / 500 |
//! | `GET` | `/jobs/{job_id}` | 공고 단건 조회 | 200 / 404 / 500 |
//! | `POST` | `/jobs` | 공고 생성 | 201 / 500 |

use actix_web::{get, post, web, HttpResponse};
use serde_json::Value;
use crate::domain::documents;
use crate::domain::dto::JobListQuery;
use crate::errors::AppError;
use crate::services::JobService;

/// 공고 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /jobs?email=hr@example.com`
///
/// 빈 `email` 값은 필터가 없는 것으로 취급합니다.
///
/// # 사용 예제
///
/// ```bash
/// curl "http://localhost:5000/jobs?email=hr@example.com"
/// ```
#[get("")]
pub async fn list_jobs(
    service: web::Data<JobService>,
    query: web::Query<JobListQuery>,
) -> Result<HttpResponse, AppError> {
    let hr_email = query.email.as_deref().filter(|email| !email.is_empty());
    let jobs = service.list_jobs(hr_email).await?;

    Ok(HttpResponse::Ok().json(documents::to_json_array(jobs)))
}

/// 공고 단건 조회 핸들러
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "_id": "65a1f0c2e4b0a1b2c3d4e5f6", "title": "Engineer", "applicationCount": 1 }
/// ```
///
/// ## 공고 없음 (404 Not Found)
/// ```json
/// { "error": "Job not found" }
/// ```
#[get("/{job_id}")]
pub async fn get_job(
    service: web::Data<JobService>,
    job_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let job = service.get_job(&job_id).await?;

    Ok(HttpResponse::Ok().json(documents::to_json(job)))
}

/// 공고 생성 핸들러
///
/// 본문은 임의의 JSON 객체이며 검증 없이 저장됩니다.
///
/// ```bash
/// curl -X POST http://localhost:5000/jobs \
///   -H "Content-Type: application/json" \
///   -d '{"title":"Engineer","hr_email":"a@x.com"}'
/// ```
#[post("")]
pub async fn create_job(
    service: web::Data<JobService>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_job(&payload).await?;

    Ok(HttpResponse::Created().json(response))
}
