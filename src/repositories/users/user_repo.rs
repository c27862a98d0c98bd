//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! - `email` (unique): 회원가입 중복 방지, 로그인 조회
//! - `resetPasswordLink`: 비밀번호 재설정 링크 조회

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    core::errors::AppError,
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::users::user::User,
    repositories::store::{UserStore, EMAIL_TAKEN},
};

pub const USER_COLLECTION: &str = "users";

const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(USER_COLLECTION)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let reset_link_index = IndexModel::builder()
            .keys(doc! { "resetPasswordLink": 1 })
            .options(IndexOptions::builder()
                .name("reset_password_link".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, reset_link_index])
            .await?;

        Ok(())
    }
}

/// unique 인덱스 위반 여부
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "user"
    }

    fn collection_name(&self) -> &str {
        USER_COLLECTION
    }

    async fn init(&self) -> Result<(), AppError> {
        self.create_indexes().await
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.collection().find_one(doc! { "_id": *id }).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.collection()
            .find_one(doc! { "email": email.to_lowercase() })
            .await?)
    }

    async fn find_user_by_reset_link(&self, link: &str) -> Result<Option<User>, AppError> {
        if link.is_empty() {
            return Ok(None);
        }

        Ok(self.collection()
            .find_one(doc! { "resetPasswordLink": link })
            .await?)
    }

    async fn insert_user(&self, mut user: User) -> Result<User, AppError> {
        if self.find_user_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(EMAIL_TAKEN.to_string()));
        }

        // 조회와 저장 사이의 경쟁은 unique 인덱스가 막습니다.
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(EMAIL_TAKEN.to_string())
                } else {
                    AppError::from(e)
                }
            })?;

        user.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("inserted user id is not an ObjectId".to_string())
        })?);

        Ok(user)
    }

    async fn set_reset_link(&self, id: &ObjectId, link: &str) -> Result<bool, AppError> {
        let result = self.collection()
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "resetPasswordLink": link, "updatedAt": DateTime::now() } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn set_password(&self, id: &ObjectId, password_hash: &str) -> Result<bool, AppError> {
        let result = self.collection()
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": {
                    "passwordHash": password_hash,
                    "resetPasswordLink": "",
                    "updatedAt": DateTime::now(),
                } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }
}

fn init_user_repository() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(async { ServiceLocator::get::<UserRepository>().init().await })
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        constructor: || Box::new(Arc::new(UserRepository::new())),
        initializer: init_user_repository,
    }
}
