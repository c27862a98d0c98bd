//! HTTP 미들웨어
//!
//! - [`AuthMiddleware`]: Bearer JWT를 검증해 `CallerIdentity`를 요청에 저장

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
