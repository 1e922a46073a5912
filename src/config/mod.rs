//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 선택되어 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - MongoDB 연결 설정
//! - [`server_config`] - 서버 바인딩, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export DB_USER="portal"
//! export DB_PASS="secret"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export PORT="5000"
//! export HOST="0.0.0.0"
//! export DB_CLUSTER="cluster0.olkic.mongodb.net"
//! export DATABASE_NAME="Job-Portal"
//! export MONGODB_URI="mongodb://localhost:27017"   # 로컬 개발용
//! export CORS_ALLOWED_ORIGINS="http://localhost:5173,https://job-portal2-efa9b.web.app"
//! ```

pub mod data_config;
pub mod server_config;

pub use data_config::*;
pub use server_config::*;
