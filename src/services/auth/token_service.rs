//! JWT 토큰 관리 서비스 구현
//!
//! 로그인 토큰과 비밀번호 재설정 토큰의 생성, 검증을 담당합니다.
//! 두 토큰은 서로 다른 키로 서명하므로 재설정 토큰으로는 API를 호출할 수 없습니다.

use std::sync::Arc;
use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use crate::{
    config::JwtConfig,
    core::errors::AppError,
    domain::entities::users::user::User,
    domain::models::token::token::TokenClaims,
};

pub const EXPIRED_RESET_LINK: &str = "Expired link. Try again";

static TOKEN_SERVICE_INSTANCE: OnceCell<Arc<TokenService>> = OnceCell::new();

pub struct TokenService {
    secret: String,
    expiration: Duration,
    reset_secret: String,
    reset_expiration: Duration,
}

impl TokenService {
    pub fn instance() -> Arc<Self> {
        TOKEN_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::from_env()))
            .clone()
    }

    pub fn new(
        secret: impl Into<String>,
        expiration: Duration,
        reset_secret: impl Into<String>,
        reset_expiration: Duration,
    ) -> Self {
        Self {
            secret: secret.into(),
            expiration,
            reset_secret: reset_secret.into(),
            reset_expiration,
        }
    }

    fn from_env() -> Self {
        Self::new(
            JwtConfig::secret(),
            Duration::hours(JwtConfig::expiration_hours()),
            JwtConfig::reset_password_secret(),
            Duration::minutes(JwtConfig::reset_expiration_minutes()),
        )
    }

    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration.num_seconds()
    }

    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let claims = TokenClaims::new(Self::subject(user)?, user.name.clone(), self.expiration);
        Self::sign(&claims, &self.secret)
    }

    pub fn generate_reset_token(&self, user: &User) -> Result<String, AppError> {
        let claims = TokenClaims::new(Self::subject(user)?, user.name.clone(), self.reset_expiration);
        Self::sign(&claims, &self.reset_secret)
    }

    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        Self::decode_claims(token, &self.secret).map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("Token expired".to_string())
            }
            _ => AppError::AuthenticationError("Invalid token".to_string()),
        })
    }

    /// 만료, 위조 모두 같은 메시지로 실패합니다.
    pub fn verify_reset_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        Self::decode_claims(token, &self.reset_secret).map_err(|e| {
            log::warn!("⚠️ 재설정 토큰 검증 실패: {}", e);
            AppError::AuthenticationError(EXPIRED_RESET_LINK.to_string())
        })
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("Invalid authorization header".to_string())),
        }
    }

    fn subject(user: &User) -> Result<String, AppError> {
        user.id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))
    }

    fn sign(claims: &TokenClaims, secret: &str) -> Result<String, AppError> {
        encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes()))
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
            .map(|token_data| token_data.claims)
    }
}

fn token_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(TokenService::instance())
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "token_service",
        constructor: token_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn service() -> TokenService {
        TokenService::new("access-secret", Duration::hours(1), "reset-secret", Duration::minutes(10))
    }

    fn user() -> User {
        let mut user = User::new("alice".into(), "alice@example.com".into(), "hash".into());
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_access_token_round_trip() {
        let service = service();
        let user = user();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.name, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_reset_token_is_not_an_access_token() {
        let service = service();
        let reset = service.generate_reset_token(&user()).unwrap();

        assert!(service.verify_reset_token(&reset).is_ok());
        assert!(matches!(service.verify_token(&reset), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_reset_token() {
        let service = TokenService::new("a", Duration::hours(1), "r", Duration::minutes(-5));
        let reset = service.generate_reset_token(&user()).unwrap();

        match service.verify_reset_token(&reset) {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, EXPIRED_RESET_LINK),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer   ").is_err());
    }

    #[test]
    fn test_user_without_id_cannot_get_token() {
        let user = User::new("bob".into(), "bob@example.com".into(), "hash".into());
        assert!(matches!(service().generate_access_token(&user), Err(AppError::InternalError(_))));
    }
}
