//! 도메인 계층
//!
//! - [`entities`] - 서비스가 확인하는 문서 필드
//! - [`dto`] - 고정 형태의 요청/응답 객체
//! - [`documents`] - JSON ↔ BSON 변환

pub mod documents;
pub mod dto;
pub mod entities;
