//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 컬렉션은 async trait으로 정의되고, MongoDB 구현이 함께 제공됩니다.
//! 서비스는 `Arc<dyn …Repository>`를 생성자로 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use job_portal_api::repositories::jobs::MongoJobRepository;
//!
//! let jobs = Arc::new(MongoJobRepository::new(&database));
//! let all = jobs.find_all(None).await?;
//! ```

pub mod jobs;
pub mod job_applications;

#[cfg(test)]
pub mod memory;

use mongodb::bson::Bson;
use mongodb::results::{InsertOneResult, UpdateResult};

pub use jobs::{JobRepository, MongoJobRepository};
pub use job_applications::{JobApplicationRepository, MongoJobApplicationRepository};

/// 단일 문서 삽입 결과
#[derive(Debug, Clone, PartialEq)]
pub struct InsertOutcome {
    pub inserted_id: Bson,
}

impl From<InsertOneResult> for InsertOutcome {
    fn from(result: InsertOneResult) -> Self {
        Self {
            inserted_id: result.inserted_id,
        }
    }
}

/// 단일 문서 갱신 결과
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Bson>,
}

impl From<UpdateResult> for UpdateOutcome {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id,
        }
    }
}
