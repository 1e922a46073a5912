//! # 지원서 리포지토리 구현
//!
//! `job_applications` 컬렉션에 대한 조회, 삽입, 상태 갱신을 담당합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::Collection;
use crate::db::Database;
use crate::errors::StoreResult;
use crate::repositories::{InsertOutcome, UpdateOutcome};

/// 지원서 데이터 액세스 인터페이스
#[async_trait]
pub trait JobApplicationRepository: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Document>>;

    async fn insert(&self, application: Document) -> StoreResult<InsertOutcome>;

    /// `status` 필드를 주어진 값으로 덮어씁니다.
    ///
    /// 같은 값으로 다시 갱신하면 `modified_count == 0`입니다.
    async fn update_status(&self, id: ObjectId, status: Bson) -> StoreResult<UpdateOutcome>;
}

/// MongoDB 기반 지원서 리포지토리
pub struct MongoJobApplicationRepository {
    collection: Collection<Document>,
}

impl MongoJobApplicationRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.job_applications(),
        }
    }
}

#[async_trait]
impl JobApplicationRepository for MongoJobApplicationRepository {
    async fn find_all(&self) -> StoreResult<Vec<Document>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect::<Vec<Document>>().await?)
    }

    async fn insert(&self, application: Document) -> StoreResult<InsertOutcome> {
        Ok(self.collection.insert_one(application).await?.into())
    }

    async fn update_status(&self, id: ObjectId, status: Bson) -> StoreResult<UpdateOutcome> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } })
            .await?;

        Ok(result.into())
    }
}
