//! 테스트용 인메모리 리포지토리
//!
//! MongoDB 없이 서비스와 라우트를 검증하기 위한 구현입니다.
//! 삽입 순서를 유지하고, `$inc`/`$set`의 matched/modified 집계를 MongoDB와
//! 같게 계산합니다. 컬렉션마다 독립적으로 장애 상태로 전환할 수 있습니다.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use crate::domain::entities::job::{APPLICATION_COUNT, HR_EMAIL};
use crate::domain::entities::job_application::STATUS;
use crate::errors::{StoreError, StoreResult};
use crate::services::{JobApplicationService, JobService};
use super::{InsertOutcome, JobApplicationRepository, JobRepository, UpdateOutcome};

/// 문서 목록과 장애 스위치를 가진 컬렉션
#[derive(Default)]
pub struct MemoryCollection {
    documents: Mutex<Vec<Document>>,
    unavailable: AtomicBool,
}

impl MemoryCollection {
    /// 이후 모든 연산이 연결 끊김(`StoreError::Driver`)으로 실패하도록 합니다.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// 장애 상태와 무관하게 현재 문서를 복사해 반환합니다.
    pub fn documents(&self) -> Vec<Document> {
        self.documents.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.lock().unwrap().is_empty()
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            let offline = io::Error::new(io::ErrorKind::NotConnected, "in-memory collection is offline");
            return Err(StoreError::Driver(mongodb::error::Error::from(offline)));
        }
        Ok(())
    }

    fn find<P>(&self, predicate: P) -> StoreResult<Vec<Document>>
    where
        P: Fn(&Document) -> bool,
    {
        self.check_available()?;
        let documents = self.documents.lock().unwrap();
        Ok(documents.iter().filter(|d| predicate(d)).cloned().collect())
    }

    fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Document>> {
        Ok(self.find(|d| has_id(d, id))?.into_iter().next())
    }

    fn insert(&self, document: Document) -> StoreResult<InsertOutcome> {
        self.check_available()?;

        let inserted_id = document
            .get("_id")
            .cloned()
            .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));

        let mut documents = self.documents.lock().unwrap();
        if documents.iter().any(|d| d.get("_id") == Some(&inserted_id)) {
            return Err(StoreError::Conversion(format!("duplicate key: {}", inserted_id)));
        }

        // MongoDB처럼 `_id`를 첫 필드로 둡니다.
        let mut stored = doc! { "_id": inserted_id.clone() };
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }
        documents.push(stored);

        Ok(InsertOutcome { inserted_id })
    }

    fn update_by_id<F>(&self, id: ObjectId, apply: F) -> StoreResult<UpdateOutcome>
    where
        F: FnOnce(&mut Document) -> StoreResult<bool>,
    {
        self.check_available()?;

        let mut documents = self.documents.lock().unwrap();
        let Some(target) = documents.iter_mut().find(|d| has_id(d, id)) else {
            return Ok(UpdateOutcome { matched_count: 0, modified_count: 0, upserted_id: None });
        };

        let modified = apply(target)?;
        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(modified),
            upserted_id: None,
        })
    }
}

fn has_id(document: &Document, id: ObjectId) -> bool {
    matches!(document.get("_id"), Some(Bson::ObjectId(oid)) if *oid == id)
}

/// `$inc: { field: 1 }`
fn increment(document: &mut Document, field: &str) -> StoreResult<bool> {
    let next = match document.get(field) {
        None => Bson::Int32(1),
        Some(Bson::Int32(n)) => Bson::Int32(n + 1),
        Some(Bson::Int64(n)) => Bson::Int64(n + 1),
        Some(Bson::Double(n)) => Bson::Double(n + 1.0),
        Some(other) => {
            return Err(StoreError::Conversion(format!(
                "cannot apply $inc to a value of type {:?}",
                other.element_type()
            )));
        }
    };
    document.insert(field, next);
    Ok(true)
}

/// `$set: { field: value }`
fn set(document: &mut Document, field: &str, value: Bson) -> StoreResult<bool> {
    if document.get(field) == Some(&value) {
        return Ok(false);
    }
    document.insert(field, value);
    Ok(true)
}

#[derive(Default)]
pub struct MemoryJobRepository {
    pub collection: MemoryCollection,
}

#[async_trait]
impl JobRepository for MemoryJobRepository {
    async fn find_all(&self, hr_email: Option<&str>) -> StoreResult<Vec<Document>> {
        self.collection.find(|d| match hr_email {
            Some(email) => d.get_str(HR_EMAIL).is_ok_and(|value| value == email),
            None => true,
        })
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Document>> {
        self.collection.find_by_id(id)
    }

    async fn insert(&self, job: Document) -> StoreResult<InsertOutcome> {
        self.collection.insert(job)
    }

    async fn increment_application_count(&self, id: ObjectId) -> StoreResult<UpdateOutcome> {
        self.collection.update_by_id(id, |d| increment(d, APPLICATION_COUNT))
    }
}

#[derive(Default)]
pub struct MemoryJobApplicationRepository {
    pub collection: MemoryCollection,
}

#[async_trait]
impl JobApplicationRepository for MemoryJobApplicationRepository {
    async fn find_all(&self) -> StoreResult<Vec<Document>> {
        self.collection.find(|_| true)
    }

    async fn insert(&self, application: Document) -> StoreResult<InsertOutcome> {
        self.collection.insert(application)
    }

    async fn update_status(&self, id: ObjectId, status: Bson) -> StoreResult<UpdateOutcome> {
        self.collection.update_by_id(id, |d| set(d, STATUS, status))
    }
}

/// 두 컬렉션을 묶은 인메모리 저장소
#[derive(Default, Clone)]
pub struct MemoryStore {
    pub jobs: Arc<MemoryJobRepository>,
    pub applications: Arc<MemoryJobApplicationRepository>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn job_service(&self) -> JobService {
        JobService::new(self.jobs.clone())
    }

    pub fn job_application_service(&self) -> JobApplicationService {
        JobApplicationService::new(self.applications.clone(), self.jobs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_insert_assigns_leading_object_id() {
        let repo = MemoryJobRepository::default();
        let outcome = repo.insert(doc! { "title": "Engineer" }).await.unwrap();

        let stored = repo.collection.documents();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].keys().next().map(String::as_str), Some("_id"));
        assert_eq!(stored[0].get("_id"), Some(&outcome.inserted_id));
    }

    #[actix_web::test]
    async fn test_increment_matches_mongodb_counts() {
        let repo = MemoryJobRepository::default();
        let id = repo.insert(doc! { "title": "Engineer" }).await.unwrap().inserted_id;
        let id = id.as_object_id().unwrap();

        let first = repo.increment_application_count(id).await.unwrap();
        let second = repo.increment_application_count(id).await.unwrap();
        let missing = repo.increment_application_count(ObjectId::new()).await.unwrap();

        assert_eq!((first.matched_count, first.modified_count), (1, 1));
        assert_eq!((second.matched_count, second.modified_count), (1, 1));
        assert_eq!((missing.matched_count, missing.modified_count), (0, 0));

        let job = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(job.get_i32(APPLICATION_COUNT).unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_increment_rejects_non_numeric_counter() {
        let repo = MemoryJobRepository::default();
        let id = repo
            .insert(doc! { "applicationCount": "many" })
            .await
            .unwrap()
            .inserted_id
            .as_object_id()
            .unwrap();

        assert!(repo.increment_application_count(id).await.is_err());
    }

    #[actix_web::test]
    async fn test_set_same_value_is_not_a_modification() {
        let repo = MemoryJobApplicationRepository::default();
        let id = repo.insert(doc! { "applicant": "bob" }).await.unwrap().inserted_id;
        let id = id.as_object_id().unwrap();

        let first = repo.update_status(id, Bson::String("accepted".into())).await.unwrap();
        let second = repo.update_status(id, Bson::String("accepted".into())).await.unwrap();

        assert_eq!((first.matched_count, first.modified_count), (1, 1));
        assert_eq!((second.matched_count, second.modified_count), (1, 0));
    }

    #[actix_web::test]
    async fn test_unavailable_collection_fails() {
        let repo = MemoryJobRepository::default();
        repo.collection.set_unavailable(true);

        assert!(matches!(repo.find_all(None).await, Err(StoreError::Driver(_))));
        assert!(repo.collection.is_empty());

        repo.collection.set_unavailable(false);
        repo.insert(doc! { "title": "Engineer" }).await.unwrap();
        assert!(!repo.collection.is_empty());
    }
}
