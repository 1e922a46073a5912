//! # 지원서 서비스 구현
//!
//! 지원서 목록 조회, 제출, 상태 변경을 담당합니다.
//!
//! ## 지원서 제출 순서
//!
//! ```text
//! 1. job_id 해석     ── 잘못된 형식이면 500, 아무것도 저장하지 않음
//! 2. 지원서 삽입     ── 실패하면 500
//! 3. $inc applicationCount (job_id가 있을 때만)
//!                    ── 일치하는 공고가 없어도 201
//!                    ── 저장소 실패면 500, 단 지원서는 이미 저장됨
//! ```
//!
//! 2와 3은 트랜잭션으로 묶이지 않습니다.

use std::sync::Arc;
use log::{debug, warn};
use mongodb::bson::{oid::ObjectId, Document};
use serde_json::Value;
use crate::domain::documents;
use crate::domain::dto::{InsertResponse, UpdateResponse};
use crate::domain::entities::job_application;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::{JobApplicationRepository, JobRepository};

pub const FETCH_APPLICATIONS_FAILED: &str = "Failed to fetch job applications";
pub const CREATE_APPLICATION_FAILED: &str = "Failed to create job application";
pub const UPDATE_STATUS_FAILED: &str = "Failed to update job application status";

/// 지원서 비즈니스 로직 서비스
///
/// 지원서 제출 시 관련 공고의 `applicationCount`를 갱신하므로
/// 공고 리포지토리도 함께 주입받습니다.
pub struct JobApplicationService {
    applications: Arc<dyn JobApplicationRepository>,
    jobs: Arc<dyn JobRepository>,
}

impl JobApplicationService {
    pub fn new(
        applications: Arc<dyn JobApplicationRepository>,
        jobs: Arc<dyn JobRepository>,
    ) -> Self {
        Self { applications, jobs }
    }

    pub async fn list_applications(&self) -> AppResult<Vec<Document>> {
        self.applications
            .find_all()
            .await
            .context(FETCH_APPLICATIONS_FAILED)
    }

    /// 지원서를 저장하고 관련 공고의 지원자 수를 1 증가시킵니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(InsertResponse)` - 지원서 삽입 결과. 공고 일치 여부와 무관합니다.
    /// * `Err(AppError::DatabaseError)` - 본문 변환, `job_id` 형식, 삽입, 증가 중 하나가 실패
    pub async fn submit_application(&self, payload: &Value) -> AppResult<InsertResponse> {
        let application = documents::from_json(payload).context(CREATE_APPLICATION_FAILED)?;

        // job_id 형식 오류는 삽입 전에 실패해야 한다
        let job_id = job_application::related_job_id(&application)
            .context(CREATE_APPLICATION_FAILED)?;

        let outcome = self
            .applications
            .insert(application)
            .await
            .context(CREATE_APPLICATION_FAILED)?;

        if let Some(job_id) = job_id {
            self.count_application(job_id, &outcome.inserted_id.to_string())
                .await?;
        }

        Ok(outcome.into())
    }

    async fn count_application(&self, job_id: ObjectId, application_id: &str) -> AppResult<()> {
        let counted = self
            .jobs
            .increment_application_count(job_id)
            .await
            .map_err(|e| {
                warn!(
                    "Application {} was recorded but applicationCount for job {} was not updated",
                    application_id, job_id
                );
                AppError::database(CREATE_APPLICATION_FAILED, e)
            })?;

        if counted.matched_count == 0 {
            debug!("No job matched job_id {}; applicationCount unchanged", job_id);
        }

        Ok(())
    }

    /// 지원서의 `status`를 덮어씁니다.
    ///
    /// 값은 검증하지 않으며, 일치하는 지원서가 없어도 성공으로 응답합니다.
    /// ID 형식 오류는 저장소 오류와 같은 500으로 처리됩니다.
    pub async fn update_status(&self, id: &str, status: &Value) -> AppResult<UpdateResponse> {
        let object_id = ObjectId::parse_str(id).context(UPDATE_STATUS_FAILED)?;
        let status = documents::value_to_bson(status).context(UPDATE_STATUS_FAILED)?;

        let outcome = self
            .applications
            .update_status(object_id, status)
            .await
            .context(UPDATE_STATUS_FAILED)?;

        Ok(outcome.into())
    }
}
