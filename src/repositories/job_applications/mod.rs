//! 지원서 리포지토리 모듈

pub mod job_application_repo;

pub use job_application_repo::{JobApplicationRepository, MongoJobApplicationRepository};
