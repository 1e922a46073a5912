//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 `web::Data`로 주입된 서비스를 호출하고, 결과를 JSON으로 직렬화합니다.
//! 실패는 `AppError`가 `ResponseError`로 변환합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 라우트별 에러 메시지, 2단계 쓰기          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB 컬렉션 접근              ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```

pub mod jobs;
pub mod job_applications;
