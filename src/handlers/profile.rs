//! 프로필 엔드포인트

use actix_web::{get, put, web, HttpResponse};
use crate::{
    core::errors::AppError,
    domain::dto::users::request::UpdateProfileRequest,
    domain::dto::users::response::ProfileResponse,
    domain::models::auth::caller_identity::CallerIdentity,
    middlewares::AuthMiddleware,
    services::profiles::ProfileService,
};

#[get("/profile/me", wrap = "AuthMiddleware::required()")]
pub async fn get_my_profile(caller: CallerIdentity) -> Result<HttpResponse, AppError> {
    let profile = ProfileService::instance().get_my_profile(&caller).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
}

#[get("/profile/user/{user_id}")]
pub async fn get_user_profile(user_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let profile = ProfileService::instance().get_profile_by_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
}

#[put("/profile", wrap = "AuthMiddleware::required()")]
pub async fn update_my_profile(
    caller: CallerIdentity,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = ProfileService::instance()
        .update_my_profile(&caller, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use crate::handlers::test_support::{bearer, install_test_services, signed_up_user};
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_update_and_read_profile() {
        install_test_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let (user_id, token) = signed_up_user("profiled").await;

        let req = test::TestRequest::put()
            .uri("/api/profile")
            .insert_header(bearer(&token))
            .set_json(json!({"bio": "Rustacean"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "profiled");
        assert_eq!(body["bio"], "Rustacean");

        let req = test::TestRequest::get()
            .uri(&format!("/api/profile/user/{}", user_id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["bio"], "Rustacean");
        assert_eq!(body["user"], user_id.as_str());

        let req = test::TestRequest::get()
            .uri("/api/profile/me")
            .insert_header(bearer(&token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["user"], user_id.as_str());
    }

    #[actix_web::test]
    async fn test_my_profile_requires_token() {
        install_test_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/profile/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 401);
    }
}
