//! 비밀번호 재설정 링크 전달
//!
//! 실제 메일 발송은 외부 시스템이 담당합니다. 기본 구현은 토큰을 가린 링크만 로그로 남깁니다.

use async_trait::async_trait;
use crate::core::errors::AppError;

const REDACTED: &str = "<redacted>";

#[async_trait]
pub trait ResetLinkSender: Send + Sync {
    async fn send(&self, email: &str, link: &str) -> Result<(), AppError>;
}

/// 링크의 마지막 경로 조각(토큰)을 가린 채 로그로 남기는 전달자
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingResetLinkSender;

#[async_trait]
impl ResetLinkSender for LoggingResetLinkSender {
    async fn send(&self, email: &str, link: &str) -> Result<(), AppError> {
        log::info!("📧 재설정 링크 전달 대기: {} → {}", email, redact_reset_link(link));
        Ok(())
    }
}

/// `https://host/auth/password/reset/<token>` → `https://host/auth/password/reset/<redacted>`
pub fn redact_reset_link(link: &str) -> String {
    match link.rfind('/') {
        Some(pos) => format!("{}{}", &link[..=pos], REDACTED),
        None => REDACTED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_reset_link_hides_token() {
        let link = "http://localhost:3000/auth/password/reset/eyJhbGciOiJIUzI1NiJ9.payload.sig";

        let redacted = redact_reset_link(link);

        assert_eq!(redacted, "http://localhost:3000/auth/password/reset/<redacted>");
        assert!(!redacted.contains("eyJ"));
    }

    #[test]
    fn test_redact_bare_token() {
        assert_eq!(redact_reset_link("eyJhbGciOiJIUzI1NiJ9.payload.sig"), REDACTED);
    }
}
