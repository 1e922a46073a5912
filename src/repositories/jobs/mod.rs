//! 채용 공고 리포지토리 모듈

pub mod job_repo;

pub use job_repo::{JobRepository, MongoJobRepository};
