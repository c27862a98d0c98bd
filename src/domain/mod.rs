//! # Domain Layer Module
//!
//! 게시글 서비스의 도메인 계층입니다. 저장 문서, API 계약, 인증 모델을 정의하며
//! actix-web이나 MongoDB 드라이버 동작에 의존하지 않습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서 (User, UserProfile, Post, Comment)
//! ├── dto       - 요청/응답 계약과 입력 검증
//! └── models    - 호출자 신원, 토큰 클레임
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`entities`] | 컬렉션과 1:1 대응하는 문서 구조 |
//! | [`dto`] | JSON 요청 본문 매핑, `validator` 기반 검증, 응답 변환 |
//! | [`models`] | 저장되지 않는 값 객체 (`CallerIdentity`, JWT 클레임) |

pub mod entities;
pub mod dto;
pub mod models;
