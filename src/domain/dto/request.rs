//! 요청 DTO

use serde::Deserialize;
use serde_json::Value;

/// `GET /jobs` 쿼리 파라미터
#[derive(Debug, Default, Deserialize)]
pub struct JobListQuery {
    /// 주어지면 `hr_email`이 일치하는 공고만 반환
    pub email: Option<String>,
}

/// `PATCH /job-applications/{id}` 요청 본문
///
/// 상태 값은 검증하지 않습니다. 본문에 없으면 `null`로 설정됩니다.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Value,
}
