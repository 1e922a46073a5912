//! 저장소 계층 에러
//!
//! 리포지토리 구현이 반환하는 에러입니다. 서비스 계층에서
//! [`ErrorContext`](super::ErrorContext)로 라우트별 [`AppError`](super::AppError)가 됩니다.

use mongodb::bson;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// ObjectId로 해석할 수 없는 식별자
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// JSON/BSON 문서 변환 실패 또는 문서에 적용할 수 없는 갱신
    #[error("document conversion failed: {0}")]
    Conversion(String),

    /// MongoDB 드라이버 에러
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}

impl From<bson::ser::Error> for StoreError {
    fn from(e: bson::ser::Error) -> Self {
        StoreError::Conversion(e.to_string())
    }
}

impl From<bson::oid::Error> for StoreError {
    fn from(e: bson::oid::Error) -> Self {
        StoreError::InvalidId(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
