//! # 게시글 리포지토리 구현
//!
//! `posts` 컬렉션에 대한 [`PostStore`] 구현입니다. 댓글은 게시글 문서에 내장되어 있어
//! 댓글 추가/삭제도 게시글 전체 교체(`replace_one`)로 처리됩니다.
//!
//! 같은 게시글을 동시에 저장하면 마지막 저장이 이깁니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::{future::BoxFuture, TryStreamExt};
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, Collection, IndexModel};
use crate::{
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    core::errors::AppError,
    db::Database,
    domain::entities::posts::post::Post,
    domain::entities::users::user_profile::UserProfile,
    repositories::profiles::profile_repo::PROFILE_COLLECTION,
    repositories::store::{PostFilter, PostStore},
};

pub const POST_COLLECTION: &str = "posts";

pub struct PostRepository {
    db: Arc<Database>,
}

impl PostRepository {
    pub fn new() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    fn collection(&self) -> Collection<Post> {
        self.db.collection::<Post>(POST_COLLECTION)
    }

    fn profiles(&self) -> Collection<UserProfile> {
        self.db.collection::<UserProfile>(PROFILE_COLLECTION)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        // 전체 목록 정렬
        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1, "_id": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        // 계정별 목록
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1, "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("user_created_at".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([created_at_index, user_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl Repository for PostRepository {
    fn name(&self) -> &str {
        "post"
    }

    fn collection_name(&self) -> &str {
        POST_COLLECTION
    }

    async fn init(&self) -> Result<(), AppError> {
        self.create_indexes().await
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn find_post(&self, id: &ObjectId) -> Result<Option<Post>, AppError> {
        Ok(self.collection().find_one(doc! { "_id": *id }).await?)
    }

    async fn find_posts(&self, filter: PostFilter) -> Result<Vec<Post>, AppError> {
        let query = match filter {
            PostFilter::All => doc! {},
            PostFilter::ByUser(user_id) => doc! { "user": user_id },
        };

        let cursor = self.collection()
            .find(query)
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn insert_post(&self, mut post: Post) -> Result<Post, AppError> {
        let result = self.collection().insert_one(&post).await?;

        post.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("inserted post id is not an ObjectId".to_string())
        })?);

        Ok(post)
    }

    async fn save_post(&self, post: &Post) -> Result<bool, AppError> {
        let Some(id) = post.id else {
            return Ok(false);
        };

        let result = self.collection()
            .replace_one(doc! { "_id": id }, post)
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete_post(&self, id: &ObjectId) -> Result<u64, AppError> {
        let result = self.collection()
            .delete_many(doc! { "_id": *id })
            .await?;

        Ok(result.deleted_count)
    }

    async fn find_authors(&self, ids: &[ObjectId]) -> Result<Vec<UserProfile>, AppError> {
        let cursor = self.profiles()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;

        Ok(cursor.try_collect().await?)
    }
}

fn init_post_repository() -> BoxFuture<'static, Result<(), AppError>> {
    Box::pin(async { ServiceLocator::get::<PostRepository>().init().await })
}

inventory::submit! {
    RepositoryRegistration {
        name: "post_repository",
        constructor: || Box::new(Arc::new(PostRepository::new())),
        initializer: init_post_repository,
    }
}
