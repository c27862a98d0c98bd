//! 인증 관련 서비스
//!
//! 로그인 토큰(Bearer)과 비밀번호 재설정 토큰은 모두 HS256 JWT이며 서로 다른 키로 서명됩니다.

pub mod token_service;

pub use token_service::TokenService;
