//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 라우트가
//! 동일한 `{"error": "..."}` 형식으로 실패를 응답하도록 합니다.
//!
//! 저장소 계층의 실제 원인(드라이버 에러, 잘못된 ObjectId 등)은 서버 로그에만
//! 기록되고, 클라이언트에는 라우트별 고정 메시지만 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppResult, ErrorContext};
//!
//! async fn list_jobs(repo: &dyn JobRepository) -> AppResult<Vec<Document>> {
//!     repo.find_all(None).await.context("Failed to fetch jobs")
//! }
//! ```

use actix_web::http::StatusCode;
use log::error;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 저장소 관련 에러 (500 Internal Server Error)
    ///
    /// `message`는 응답 본문에, `cause`는 로그에만 사용됩니다.
    #[error("{message}")]
    DatabaseError { message: String, cause: String },

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 요청 본문 파싱 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 시작 시 설정 누락/오류
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// 응답 본문 메시지와 로그용 원인으로 저장소 에러를 만듭니다.
    pub fn database(message: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        AppError::DatabaseError {
            message: message.into(),
            cause: cause.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러의 원인은 여기서 로그로 남기고 응답에는 포함하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if let AppError::DatabaseError { message, cause } = self {
            error!("{}: {}", message, cause);
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 라우트별 메시지와 함께 에러를 저장소 에러로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::database(msg, e))
    }
}
