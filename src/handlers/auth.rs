//! # Account HTTP Handlers
//!
//! 회원가입, 로그인, 비밀번호 재설정 엔드포인트입니다. 모두 인증 없이 호출합니다.
//!
//! ```bash
//! curl -X POST http://localhost:8000/api/signin \
//!   -H "Content-Type: application/json" \
//!   -d '{"email":"user@example.com","password":"secret1"}'
//! ```

use actix_web::{post, put, web, HttpResponse};
use crate::{
    core::errors::AppError,
    domain::dto::common::MessageResponse,
    domain::dto::users::request::{ForgotPasswordRequest, ResetPasswordRequest, SigninRequest, SignupRequest},
    domain::dto::users::response::{AccountSummary, SigninResponse},
    services::users::{user_service::{RESET_PASSWORD_SUCCESS, SIGNUP_SUCCESS}, UserService},
};

#[post("/signup")]
pub async fn signup(payload: web::Json<SignupRequest>) -> Result<HttpResponse, AppError> {
    UserService::instance().signup(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(SIGNUP_SUCCESS)))
}

#[post("/signin")]
pub async fn signin(payload: web::Json<SigninRequest>) -> Result<HttpResponse, AppError> {
    let (token, user) = UserService::instance().signin(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(SigninResponse {
        token,
        user: AccountSummary::from(&user),
    }))
}

/// 재설정 링크 발급. 링크 전달은 `ResetLinkSender`가 담당합니다.
#[put("/forgot-password")]
pub async fn forgot_password(payload: web::Json<ForgotPasswordRequest>) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    let email = request.email.clone().unwrap_or_default();

    UserService::instance().request_password_reset(request).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "Email has been sent to {}. Follow the instruction to reset your password.",
        email
    ))))
}

#[put("/reset-password")]
pub async fn reset_password(payload: web::Json<ResetPasswordRequest>) -> Result<HttpResponse, AppError> {
    UserService::instance().reset_password(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(RESET_PASSWORD_SUCCESS)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};
    use crate::handlers::test_support::install_test_services;
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_signup_then_signin() {
        install_test_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let email = format!("http-{}@example.com", ObjectId::new().to_hex());

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(json!({"name": "http", "email": email, "password": "secret1"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], SIGNUP_SUCCESS);

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(json!({"name": "http", "email": email, "password": "secret1"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 409);

        let req = test::TestRequest::post()
            .uri("/api/signin")
            .set_json(json!({"email": email, "password": "secret1"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert_eq!(body["user"]["email"], email.as_str());
        assert!(body["user"].get("password").is_none());
    }

    #[actix_web::test]
    async fn test_signin_wrong_password_is_401() {
        install_test_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/signin")
            .set_json(json!({"email": "missing@example.com", "password": "whatever"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 401);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Email or password is incorrect");
    }

    #[actix_web::test]
    async fn test_forgot_password_message() {
        install_test_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let email = format!("forgot-{}@example.com", ObjectId::new().to_hex());

        let req = test::TestRequest::post()
            .uri("/api/signup")
            .set_json(json!({"name": "forgot", "email": email, "password": "secret1"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/forgot-password")
            .set_json(json!({"email": email}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["message"].as_str().unwrap().contains(&email));
    }
}
