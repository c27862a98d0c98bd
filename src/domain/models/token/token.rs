//! JWT 클레임
//!
//! 로그인 토큰과 비밀번호 재설정 토큰은 같은 클레임 구조를 쓰고,
//! 서명 키와 만료 시간으로 구분됩니다.
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (User id)
/// - `name`: 사용자 이름
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(sub: impl Into<String>, name: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: sub.into(),
            name: name.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
