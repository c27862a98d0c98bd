//! 프로필 서비스 구현
//!
//! 게시글 작성자로 표시되는 UserProfile의 조회와 수정을 담당합니다.

use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::{
    core::errors::AppError,
    core::registry::ServiceLocator,
    domain::dto::users::request::UpdateProfileRequest,
    domain::dto::validation::ValidatedRequest,
    domain::entities::users::user_profile::{ProfileChanges, UserProfile},
    domain::models::auth::caller_identity::CallerIdentity,
    repositories::{profiles::ProfileRepository, store::ProfileStore},
    services::posts::post_service::NO_PROFILE_FOUND,
    utils::object_id::parse_object_id,
};

static PROFILE_SERVICE_INSTANCE: OnceCell<Arc<ProfileService>> = OnceCell::new();

pub struct ProfileService {
    profiles: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn instance() -> Arc<Self> {
        PROFILE_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<ProfileRepository>())))
            .clone()
    }

    pub fn install(service: Arc<Self>) -> Arc<Self> {
        PROFILE_SERVICE_INSTANCE.get_or_init(|| service).clone()
    }

    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    pub async fn get_my_profile(&self, caller: &CallerIdentity) -> Result<UserProfile, AppError> {
        let user_id = caller.object_id()?;
        self.find_by_user(&user_id).await
    }

    pub async fn get_profile_by_user(&self, user_id: &str) -> Result<UserProfile, AppError> {
        let user_id = parse_object_id(user_id)?;
        self.find_by_user(&user_id).await
    }

    /// 값이 있는 필드만 변경합니다. 변경할 값이 없으면 현재 프로필을 그대로 반환합니다.
    pub async fn update_my_profile(
        &self,
        caller: &CallerIdentity,
        request: UpdateProfileRequest,
    ) -> Result<UserProfile, AppError> {
        let user_id = caller.object_id()?;
        request.check()?;

        let changes = ProfileChanges::from(request);
        if changes.is_empty() {
            return self.find_by_user(&user_id).await;
        }

        let profile = self.profiles
            .update_profile(&user_id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(NO_PROFILE_FOUND.to_string()))?;

        log::info!("🪪 프로필 수정: user={}", user_id);
        Ok(profile)
    }

    async fn find_by_user(&self, user_id: &mongodb::bson::oid::ObjectId) -> Result<UserProfile, AppError> {
        self.profiles
            .find_profile_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NO_PROFILE_FOUND.to_string()))
    }
}

fn profile_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(ProfileService::instance())
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "profile_service",
        constructor: profile_service_constructor,
    }
}
