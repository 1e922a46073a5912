//! # 채용 공고 서비스 구현
//!
//! 공고 목록/단건 조회와 생성을 담당합니다. 각 연산은 저장소 호출 한 번이며,
//! 실패는 라우트별 고정 메시지를 가진 `AppError`로 변환됩니다.
//!
//! | 연산 | 실패 메시지 |
//! |------|-------------|
//! | 목록 조회 | `Failed to fetch jobs` |
//! | 단건 조회 | `Failed to fetch job` / `Job not found` |
//! | 생성 | `Failed to create job` |

use std::sync::Arc;
use log::debug;
use mongodb::bson::{oid::ObjectId, Document};
use serde_json::Value;
use crate::domain::documents;
use crate::domain::dto::InsertResponse;
use crate::domain::entities::job;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::JobRepository;

pub const FETCH_JOBS_FAILED: &str = "Failed to fetch jobs";
pub const FETCH_JOB_FAILED: &str = "Failed to fetch job";
pub const JOB_NOT_FOUND: &str = "Job not found";
pub const CREATE_JOB_FAILED: &str = "Failed to create job";

/// 채용 공고 비즈니스 로직 서비스
pub struct JobService {
    jobs: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(jobs: Arc<dyn JobRepository>) -> Self {
        Self { jobs }
    }

    /// 공고 목록을 조회합니다.
    ///
    /// `hr_email`이 주어지면 담당자 이메일이 정확히 일치하는 공고만 반환합니다.
    pub async fn list_jobs(&self, hr_email: Option<&str>) -> AppResult<Vec<Document>> {
        self.jobs.find_all(hr_email).await.context(FETCH_JOBS_FAILED)
    }

    /// ID로 공고를 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Document)` - 공고를 찾은 경우
    /// * `Err(AppError::NotFound)` - ObjectId 형식이 아니거나 공고가 없는 경우
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    pub async fn get_job(&self, id: &str) -> AppResult<Document> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            debug!("Rejecting malformed job id: {}", id);
            return Err(AppError::NotFound(JOB_NOT_FOUND.to_string()));
        };

        self.jobs
            .find_by_id(object_id)
            .await
            .context(FETCH_JOB_FAILED)?
            .ok_or_else(|| AppError::NotFound(JOB_NOT_FOUND.to_string()))
    }

    /// 요청 본문 그대로 새 공고를 생성합니다.
    ///
    /// 검증과 중복 검사는 하지 않으며, `applicationCount`만 제거합니다.
    pub async fn create_job(&self, payload: &Value) -> AppResult<InsertResponse> {
        let mut new_job = documents::from_json(payload).context(CREATE_JOB_FAILED)?;
        job::strip_owned_fields(&mut new_job);

        let outcome = self.jobs.insert(new_job).await.context(CREATE_JOB_FAILED)?;
        debug!("Job created: {}", outcome.inserted_id);

        Ok(outcome.into())
    }
}
