//! 채용 포털 API 백엔드
//!
//! 채용 공고와 지원서를 MongoDB에 저장하는 JSON HTTP API입니다.
//! 공고/지원서 본문은 스키마 없이 그대로 저장되며, 지원서가 제출되면
//! 관련 공고의 `applicationCount`가 1 증가합니다.
//!
//! # Features
//!
//! - **채용 공고**: 목록(담당자 이메일 필터), 단건 조회, 생성
//! - **지원서**: 제출, 전체 조회, 상태 변경
//! - **CORS**: Origin 허용 목록 + 자격 증명 지원
//! - **MongoDB**: Atlas Stable API v1
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use job_portal_api::repositories::{MongoJobApplicationRepository, MongoJobRepository};
//! use job_portal_api::services::{JobApplicationService, JobService};
//!
//! let jobs = Arc::new(MongoJobRepository::new(&database));
//! let applications = Arc::new(MongoJobApplicationRepository::new(&database));
//!
//! let job_service = JobService::new(jobs.clone());
//! let application_service = JobApplicationService::new(applications, jobs);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
