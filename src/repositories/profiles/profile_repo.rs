//! # 프로필 리포지토리 구현
//!
//! `user_profiles` 컬렉션에 대한 [`ProfileStore`] 구현입니다.
//! 게시글 작성자 치환은 [`PostRepository`](crate::repositories::posts::PostRepository)가
//! 같은 컬렉션을 직접 조회합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    core::errors::AppError,
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::users::user_profile::{ProfileChanges, UserProfile},
    repositories::store::ProfileStore,
    repositories::users::user_repo::is_duplicate_key,
};

pub const PROFILE_COLLECTION: &str = "user_profiles";

pub struct ProfileRepository {
    db: Arc<Database>,
}

impl ProfileRepository {
    pub fn new() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    fn collection(&self) -> Collection<UserProfile> {
        self.db.collection::<UserProfile>(PROFILE_COLLECTION)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        // User 1:1
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_unique".to_string())
                .build())
            .build();

        self.collection().create_index(user_index).await?;

        Ok(())
    }
}

fn changes_to_document(changes: &ProfileChanges) -> Document {
    let mut set = doc! { "updatedAt": DateTime::now() };
    if let Some(name) = &changes.name {
        set.insert("name", name.clone());
    }
    if let Some(bio) = &changes.bio {
        set.insert("bio", bio.clone());
    }
    if let Some(location) = &changes.location {
        set.insert("location", location.clone());
    }
    set
}

#[async_trait]
impl Repository for ProfileRepository {
    fn name(&self) -> &str {
        "profile"
    }

    fn collection_name(&self) -> &str {
        PROFILE_COLLECTION
    }

    async fn init(&self) -> Result<(), AppError> {
        self.create_indexes().await
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn find_profile_by_user(&self, user_id: &ObjectId) -> Result<Option<UserProfile>, AppError> {
        Ok(self.collection().find_one(doc! { "user": *user_id }).await?)
    }

    async fn insert_profile(&self, mut profile: UserProfile) -> Result<UserProfile, AppError> {
        let result = self.collection()
            .insert_one(&profile)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("Profile already exists".to_string())
                } else {
                    AppError::from(e)
                }
            })?;

        profile.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("inserted profile id is not an ObjectId".to_string())
        })?);

        Ok(profile)
    }

    async fn update_profile(
        &self,
        user_id: &ObjectId,
        changes: ProfileChanges,
    ) -> Result<Option<UserProfile>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        Ok(self.collection()
            .find_one_and_update(
                doc! { "user": *user_id },
                doc! { "$set": changes_to_document(&changes) },
            )
            .with_options(options)
            .await?)
    }
}

fn init_profile_repository() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(async { ServiceLocator::get::<ProfileRepository>().init().await })
}

inventory::submit! {
    RepositoryRegistration {
        name: "profile_repository",
        constructor: || Box::new(Arc::new(ProfileRepository::new())),
        initializer: init_profile_repository,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_to_document_sets_present_fields_only() {
        let document = changes_to_document(&ProfileChanges {
            bio: Some("hello".to_string()),
            ..Default::default()
        });

        assert_eq!(document.get_str("bio").unwrap(), "hello");
        assert!(document.contains_key("updatedAt"));
        assert!(!document.contains_key("name"));
        assert!(!document.contains_key("location"));
    }
}
