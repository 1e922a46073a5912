//! # 채용 공고 리포지토리 구현
//!
//! `Jobs` 컬렉션에 대한 조회, 삽입, 지원자 수 증가를 담당합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;
use crate::db::Database;
use crate::errors::StoreResult;
use crate::repositories::{InsertOutcome, UpdateOutcome};

/// 채용 공고 데이터 액세스 인터페이스
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// 모든 공고를 저장소 순서대로 조회합니다.
    ///
    /// `hr_email`이 주어지면 해당 값과 정확히 일치하는 공고만 반환합니다.
    async fn find_all(&self, hr_email: Option<&str>) -> StoreResult<Vec<Document>>;

    /// ID로 공고를 조회합니다. 없으면 `Ok(None)`.
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Document>>;

    /// 새 공고를 삽입합니다. 중복 검사는 하지 않습니다.
    async fn insert(&self, job: Document) -> StoreResult<InsertOutcome>;

    /// `applicationCount`를 1 증가시킵니다.
    ///
    /// 일치하는 공고가 없으면 `matched_count == 0`이며 에러가 아닙니다.
    async fn increment_application_count(&self, id: ObjectId) -> StoreResult<UpdateOutcome>;
}

/// MongoDB 기반 공고 리포지토리
pub struct MongoJobRepository {
    collection: Collection<Document>,
}

impl MongoJobRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.jobs(),
        }
    }
}

#[async_trait]
impl JobRepository for MongoJobRepository {
    async fn find_all(&self, hr_email: Option<&str>) -> StoreResult<Vec<Document>> {
        let filter = match hr_email {
            Some(email) => doc! { "hr_email": email },
            None => doc! {},
        };

        let cursor = self.collection.find(filter).await?;
        Ok(cursor.try_collect::<Vec<Document>>().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Document>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn insert(&self, job: Document) -> StoreResult<InsertOutcome> {
        Ok(self.collection.insert_one(job).await?.into())
    }

    async fn increment_application_count(&self, id: ObjectId) -> StoreResult<UpdateOutcome> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$inc": { "applicationCount": 1 } })
            .await?;

        Ok(result.into())
    }
}
