//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 문자열 정리 및 serde 헬퍼
//! - [`object_id`] - ObjectId 파싱, 타임스탬프 포맷
//! - [`display_terminal`] - 기동 과정 출력 포맷팅

pub mod string_utils;
pub mod object_id;
pub mod display_terminal;
