//! 도메인 엔티티 모듈
//!
//! 두 컬렉션 모두 스키마가 없으므로 구조체 대신 `Document`를 그대로 사용하고,
//! 서비스 로직이 확인하는 필드 이름과 추출 함수만 정의합니다.
//!
//! - [`job`] - `hr_email`, `applicationCount`
//! - [`job_application`] - `job_id`, `status`

pub mod job;
pub mod job_application;
