//! # Domain Models Module
//!
//! 저장되지 않는 값 객체를 정의합니다.
//!
//! - [`auth`]: 인증 미들웨어가 만드는 [`CallerIdentity`]
//! - [`token`]: JWT 클레임
//!
//! Entities와 달리 식별자나 생명주기가 없고, 요청 하나의 범위 안에서만 사용됩니다.

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
