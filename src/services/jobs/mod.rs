//! 채용 공고 서비스 모듈

pub mod job_service;

pub use job_service::JobService;
