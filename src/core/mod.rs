//! # Core Framework Module
//!
//! 애플리케이션 전반에서 공유하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 리포지토리/서비스 싱글톤 보관소
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 등록
//! - **Repository trait**: 컬렉션 이름과 기동 시 인덱스 초기화
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: `{"error": ...}` JSON 응답으로 자동 변환
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let database = Arc::new(Database::new().await.expect("데이터베이스 연결 실패"));
//!     ServiceLocator::set(database);
//!     ServiceLocator::initialize_all().await.expect("서비스 초기화 실패");
//!
//!     HttpServer::new(|| App::new().configure(configure_all_routes))
//!         .bind(("0.0.0.0", 8080))?
//!         .run()
//!         .await
//! }
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for type: PostService
//! ```
//! **해결**: 서비스 계층 구조를 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: No repository found for entity: post
//! ```
//! **해결**: `inventory::submit!`으로 등록하거나 `ServiceLocator::set()`으로 수동 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
