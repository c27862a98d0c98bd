use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::utils::object_id::parse_object_id;

/// 인증 미들웨어가 토큰에서 추출한 호출자 정보
///
/// 요청 extensions에 저장되며, 핸들러는 이를 서비스 호출에 명시적으로 전달합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// User 문서 id (토큰의 `sub`)
    pub user_id: String,
}

impl CallerIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }

    pub fn object_id(&self) -> Result<ObjectId, AppError> {
        parse_object_id(&self.user_id)
    }
}

impl FromRequest for CallerIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<CallerIdentity>() {
            Some(caller) => ready(Ok(caller.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Authorization token required".to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extract_caller_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(CallerIdentity::new("507f1f77bcf86cd799439011"));

        let caller = CallerIdentity::extract(&req).await.unwrap();

        assert_eq!(caller.object_id().unwrap().to_hex(), "507f1f77bcf86cd799439011");
    }

    #[actix_web::test]
    async fn test_missing_caller_is_authentication_error() {
        let req = TestRequest::default().to_http_request();

        assert!(matches!(
            CallerIdentity::extract(&req).await,
            Err(AppError::AuthenticationError(_))
        ));
    }
}
