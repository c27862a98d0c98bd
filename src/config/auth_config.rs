//! # Authentication Configuration Module
//!
//! 로그인 토큰, 비밀번호 재설정 토큰, CORS 허용 출처 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 로그인 토큰 (Authorization: Bearer ...)
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # 비밀번호 재설정 링크
//! export JWT_RESET_PASSWORD_SECRET="another-secret"
//! export JWT_RESET_EXPIRATION_MINUTES="10"
//! export CLIENT_URL="http://localhost:3000"
//! ```

use std::env;

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    /// 재설정 토큰은 로그인 토큰과 다른 키로 서명합니다.
    pub fn reset_password_secret() -> String {
        env::var("JWT_RESET_PASSWORD_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_RESET_PASSWORD_SECRET not set, using default (not secure for production!)");
                "your-reset-password-secret".to_string()
            })
    }

    pub fn reset_expiration_minutes() -> i64 {
        env::var("JWT_RESET_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

pub struct CorsConfig;

impl CorsConfig {
    /// 프론트엔드 주소 (재설정 링크 생성과 CORS 허용에 사용)
    pub fn client_url() -> String {
        env::var("CLIENT_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
    }

    pub fn allowed_origins() -> Vec<String> {
        let mut origins = vec![Self::client_url()];
        origins.push("http://127.0.0.1:3000".to_string());
        origins.dedup();
        origins
    }

    /// 비밀번호 재설정 화면 주소
    pub fn reset_password_url(token: &str) -> String {
        format!("{}/auth/password/reset/{}", Self::client_url().trim_end_matches('/'), token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_defaults() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
        if env::var("JWT_RESET_EXPIRATION_MINUTES").is_err() {
            assert_eq!(JwtConfig::reset_expiration_minutes(), 10);
        }
    }

    #[test]
    fn test_reset_password_url_contains_token() {
        let url = CorsConfig::reset_password_url("abc.def.ghi");
        assert!(url.ends_with("/auth/password/reset/abc.def.ghi"));
        assert!(!url.contains("//auth"));
    }
}
