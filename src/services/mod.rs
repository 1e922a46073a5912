//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리를 생성자로 주입받아 `main`에서 한 번 만들어지고,
//! `web::Data`로 핸들러에 전달됩니다. 저장소 에러는 여기서 라우트별 메시지를 가진
//! `AppError`로 바뀝니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use job_portal_api::repositories::MongoJobRepository;
//! use job_portal_api::services::JobService;
//!
//! let jobs = Arc::new(MongoJobRepository::new(&database));
//! let job_service = JobService::new(jobs);
//! ```

pub mod jobs;
pub mod job_applications;

pub use jobs::JobService;
pub use job_applications::JobApplicationService;
