//! 지원서 문서

use mongodb::bson::{oid::ObjectId, Bson, Document};
use crate::errors::{StoreError, StoreResult};

/// 관련 공고의 `_id`(16진수 문자열)
pub const JOB_ID: &str = "job_id";

/// 호출자가 갱신하는 상태 필드
pub const STATUS: &str = "status";

/// 지원서가 가리키는 공고의 ObjectId를 해석합니다.
///
/// - 필드가 없거나 `null`이면 `Ok(None)` (증가할 공고 없음)
/// - 유효한 16진수 문자열이나 ObjectId이면 `Ok(Some(id))`
/// - 그 밖의 값은 `StoreError::InvalidId`
pub fn related_job_id(application: &Document) -> StoreResult<Option<ObjectId>> {
    match application.get(JOB_ID) {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::ObjectId(id)) => Ok(Some(*id)),
        Some(Bson::String(hex)) => Ok(Some(ObjectId::parse_str(hex)?)),
        Some(other) => Err(StoreError::InvalidId(format!(
            "{} must be a string, got {:?}",
            JOB_ID,
            other.element_type()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_related_job_id_from_hex_string() {
        let id = ObjectId::new();
        let application = doc! { "job_id": id.to_hex(), "applicant": "bob" };

        assert_eq!(related_job_id(&application).unwrap(), Some(id));
    }

    #[test]
    fn test_missing_or_null_job_id() {
        assert_eq!(related_job_id(&doc! { "applicant": "bob" }).unwrap(), None);
        assert_eq!(related_job_id(&doc! { "job_id": Bson::Null }).unwrap(), None);
    }

    #[test]
    fn test_malformed_job_id() {
        assert!(matches!(
            related_job_id(&doc! { "job_id": "not-an-id" }),
            Err(StoreError::InvalidId(_))
        ));
        assert!(matches!(
            related_job_id(&doc! { "job_id": 42 }),
            Err(StoreError::InvalidId(_))
        ));
    }
}
