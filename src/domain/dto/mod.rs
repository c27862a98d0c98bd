//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 JSON 계약과 입력 검증을 정의합니다.
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`posts`] | 게시글/댓글 요청, 작성자 치환 여부에 따른 응답 |
//! | [`users`] | 회원가입, 로그인, 비밀번호 재설정, 프로필 수정 |
//! | [`validation`] | `validator` 위반을 순서가 고정된 [`ValidationReport`]로 변환 |
//! | [`common`] | 단순 메시지 응답 |
//!
//! ## 검증 흐름
//!
//! ```rust,ignore
//! use crate::domain::dto::{CreatePostRequest, ValidatedRequest};
//!
//! let request: CreatePostRequest = serde_json::from_value(body)?;
//! request.check()?; // 첫 번째 위반 메시지 → AppError::ValidationError
//! ```
//!
//! 요청 DTO의 문자열 필드는 모두 `Option<String>`입니다. 필드 누락, `null`,
//! 공백 문자열이 같은 `None`으로 모이므로 검증 규칙은 `required`와 `length`만으로 충분합니다.
//!
//! 응답 DTO는 식별자를 24자리 16진수 문자열로, 시각을 RFC 3339 문자열로 내보냅니다.

pub mod common;
pub mod posts;
pub mod users;
pub mod validation;

pub use common::*;
pub use posts::request::*;
pub use posts::response::*;
pub use users::request::*;
pub use users::response::*;
pub use validation::*;
