//! 에러 타입 모듈
//!
//! - [`errors`] - HTTP 응답으로 변환되는 `AppError`
//! - [`store`] - 리포지토리 계층의 `StoreError`

#[allow(clippy::module_inception)]
pub mod errors;
pub mod store;

pub use errors::{AppError, AppResult, ErrorContext};
pub use store::{StoreError, StoreResult};
