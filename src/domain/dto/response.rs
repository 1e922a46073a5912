//! 응답 DTO
//!
//! 삽입/갱신 결과는 프론트엔드가 기대하는 camelCase 필드명으로 직렬화됩니다.
//!
//! ```json
//! { "acknowledged": true, "insertedId": "65a1f0c2e4b0a1b2c3d4e5f6" }
//! ```

use serde::Serialize;
use serde_json::Value;
use crate::domain::documents::bson_to_json;
use crate::repositories::{InsertOutcome, UpdateOutcome};

/// `GET /` 응답
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 문서 삽입 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: Value,
}

impl From<InsertOutcome> for InsertResponse {
    fn from(outcome: InsertOutcome) -> Self {
        Self {
            acknowledged: true,
            inserted_id: bson_to_json(outcome.inserted_id),
        }
    }
}

/// 문서 갱신 결과
///
/// 일치하는 문서가 없어도 에러가 아니며 `matchedCount: 0`으로 응답합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<Value>,
}

impl From<UpdateOutcome> for UpdateResponse {
    fn from(outcome: UpdateOutcome) -> Self {
        Self {
            acknowledged: true,
            matched_count: outcome.matched_count,
            modified_count: outcome.modified_count,
            upserted_count: u64::from(outcome.upserted_id.is_some()),
            upserted_id: outcome.upserted_id.map(bson_to_json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, Bson};
    use serde_json::json;

    #[test]
    fn test_insert_response_shape() {
        let id = ObjectId::new();
        let response = InsertResponse::from(InsertOutcome { inserted_id: Bson::ObjectId(id) });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "acknowledged": true, "insertedId": id.to_hex() })
        );
    }

    #[test]
    fn test_update_response_shape() {
        let response = UpdateResponse::from(UpdateOutcome {
            matched_count: 1,
            modified_count: 0,
            upserted_id: None,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "acknowledged": true,
                "matchedCount": 1,
                "modifiedCount": 0,
                "upsertedCount": 0,
                "upsertedId": null
            })
        );
    }
}
