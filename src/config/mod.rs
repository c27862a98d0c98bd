//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 타입별 접근자로 제공합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 먼저 로드한 뒤 사용됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 저장소 백엔드, 서버, 비밀번호 해싱
//! - [`auth_config`] - JWT, 비밀번호 재설정, CORS
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="development"      # development, test, staging, production
//! export STORAGE_BACKEND="mongo"        # mongo, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="post_service_dev"
//! export HOST="127.0.0.1"
//! export PORT="5000"
//! export BCRYPT_COST="12"               # 4-15 범위
//! export JWT_SECRET="your-super-secret-key"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! let env = Environment::current();
//! let address = ServerConfig::bind_address();
//! let secret = JwtConfig::secret();
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
