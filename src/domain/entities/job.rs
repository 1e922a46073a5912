//! 채용 공고 문서
//!
//! 공고는 스키마가 없는 문서이며, 서비스가 직접 읽거나 쓰는 필드는 아래 두 개뿐입니다.

use mongodb::bson::Document;

/// 목록 조회 필터로 쓰이는 담당자 이메일 필드
pub const HR_EMAIL: &str = "hr_email";

/// 지원서 생성 시에만 증가하는 지원자 수 필드
pub const APPLICATION_COUNT: &str = "applicationCount";

/// 새 공고 문서에서 서비스가 소유한 필드를 제거합니다.
///
/// `applicationCount`는 지원서 생성으로만 바뀌므로 요청 본문의 값은 버립니다.
pub fn strip_owned_fields(job: &mut Document) {
    job.remove(APPLICATION_COUNT);
}
