//! 지원서 서비스 모듈

pub mod job_application_service;

pub use job_application_service::JobApplicationService;
