//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고 [`CallerIdentity`]를
//! 요청 extensions에 저장합니다.
//!
//! ```rust,ignore
//! web::resource("/post")
//!     .wrap(AuthMiddleware::required())
//!     .route(web::post().to(create_post));
//! ```
//!
//! [`CallerIdentity`]: crate::domain::models::auth::caller_identity::CallerIdentity

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 토큰이 없거나 유효하지 않으면 다음 서비스를 호출하지 않고 401로 응답합니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use mongodb::bson::oid::ObjectId;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::auth::caller_identity::CallerIdentity;
    use crate::services::auth::TokenService;

    async fn whoami(caller: CallerIdentity) -> HttpResponse {
        HttpResponse::Ok().body(caller.user_id)
    }

    fn token_for(user_id: ObjectId) -> String {
        let mut user = User::new("alice".into(), "alice@example.com".into(), "hash".into());
        user.id = Some(user_id);
        TokenService::instance().generate_access_token(&user).unwrap()
    }

    #[actix_web::test]
    async fn test_required_without_token_is_401_json() {
        let app = test::init_service(
            App::new().service(web::resource("/me").wrap(AuthMiddleware::required()).to(whoami)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;

        assert_eq!(resp.status().as_u16(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_required_with_valid_token() {
        let app = test::init_service(
            App::new().service(web::resource("/me").wrap(AuthMiddleware::required()).to(whoami)),
        )
        .await;
        let user_id = ObjectId::new();

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token_for(user_id))))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, user_id.to_hex().as_bytes());
    }

    #[actix_web::test]
    async fn test_required_rejects_bad_token() {
        let app = test::init_service(
            App::new().service(web::resource("/me").wrap(AuthMiddleware::required()).to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid token");
    }
}
