//! 요청/응답 데이터 전송 객체(DTO)
//!
//! 문서 본문 자체는 스키마가 없으므로 DTO로 모델링하지 않습니다.
//! 여기에는 쿼리 파라미터, 상태 갱신 본문, 삽입/갱신 결과처럼
//! 형태가 고정된 값만 정의합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
