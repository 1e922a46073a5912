//! JSON ↔ BSON 문서 변환
//!
//! 요청 본문은 임의의 JSON 객체이므로 고정된 구조체 대신 `Document`로 다룹니다.
//! 응답으로 돌려줄 때는 `ObjectId`를 16진수 문자열로, 날짜를 RFC 3339 문자열로
//! 평탄화하고 나머지 값은 relaxed Extended JSON을 사용합니다.

use mongodb::bson::{self, Bson, Document};
use serde_json::{Map, Value};
use crate::errors::StoreResult;

/// JSON 요청 본문을 BSON 문서로 변환합니다.
///
/// 객체가 아닌 본문(배열, 문자열 등)은 `StoreError::Conversion`이 됩니다.
pub fn from_json(value: &Value) -> StoreResult<Document> {
    Ok(bson::to_document(value)?)
}

/// 단일 JSON 값을 BSON 값으로 변환합니다.
pub fn value_to_bson(value: &Value) -> StoreResult<Bson> {
    Ok(bson::to_bson(value)?)
}

/// 저장된 BSON 값을 응답용 JSON 값으로 변환합니다.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or_else(|_| Value::from(dt.timestamp_millis())),
        Bson::Document(doc) => to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// 문서 하나를 JSON 객체로 변환합니다.
pub fn to_json(doc: Document) -> Value {
    Value::Object(
        doc.into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect::<Map<String, Value>>(),
    )
}

/// 문서 목록을 JSON 배열로 변환합니다.
pub fn to_json_array(docs: Vec<Document>) -> Value {
    Value::Array(docs.into_iter().map(to_json).collect())
}
