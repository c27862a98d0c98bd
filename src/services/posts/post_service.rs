//! 게시글 서비스 구현
//!
//! 게시글과 내장 댓글의 조회, 작성, 수정, 삭제를 담당합니다.
//!
//! ## 처리 순서
//!
//! 식별자가 필요한 모든 연산은 저장소에 접근하기 전에 ObjectId 형식을 먼저 검사합니다.
//!
//! ```text
//! update / delete:
//!   id 검사 → 호출자 프로필 조회 → 게시글 조회 → 소유자 확인 → (검증) → 저장
//! ```
//!
//! ## 동시성
//!
//! 저장은 문서 전체 교체이므로 같은 게시글을 동시에 수정하면 마지막 저장이 이깁니다.
//! 예를 들어 두 사용자가 동시에 댓글을 달면 한쪽 댓글이 사라질 수 있습니다.

use std::sync::Arc;
use mongodb::bson::{oid::ObjectId, DateTime};
use once_cell::sync::OnceCell;
use crate::{
    core::errors::AppError,
    core::registry::ServiceLocator,
    domain::dto::posts::request::{CreateCommentRequest, CreatePostRequest, UpdatePostRequest},
    domain::dto::validation::ValidatedRequest,
    domain::entities::posts::post::{Comment, PopulatedComment, PopulatedPost, Post},
    domain::models::auth::caller_identity::CallerIdentity,
    repositories::{
        posts::PostRepository,
        profiles::ProfileRepository,
        store::{PostFilter, PostStore, ProfileStore, UserStore},
        users::UserRepository,
    },
    utils::object_id::parse_object_id,
};

pub const NO_POST_FOUND: &str = "No post found!";
pub const NO_POST_FOUND_FOR_COMMENT: &str = "No Post found!";
pub const NO_ACCOUNT_FOUND: &str = "No Account found!";
pub const NO_PROFILE_FOUND: &str = "No profile found!";
pub const NO_USER_FOUND: &str = "No user found!";
pub const CANT_FIND_POST: &str = "Can't find post!";
pub const ONLY_UPDATE_OWN: &str = "Only update your posts!";
pub const ONLY_DELETE_OWN: &str = "Only delete your posts!";
pub const COMMENT_ID_REQUIRED: &str = "Comment ID required!";

static POST_SERVICE_INSTANCE: OnceCell<Arc<PostService>> = OnceCell::new();

/// 호출자의 User id와 UserProfile id
#[derive(Debug, Clone, Copy)]
struct Author {
    user_id: ObjectId,
    profile_id: ObjectId,
}

pub struct PostService {
    posts: Arc<dyn PostStore>,
    users: Arc<dyn UserStore>,
    profiles: Arc<dyn ProfileStore>,
}

impl PostService {
    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 먼저 [`install`](Self::install)된 인스턴스가 없으면 MongoDB 리포지토리로 생성합니다.
    pub fn instance() -> Arc<Self> {
        POST_SERVICE_INSTANCE
            .get_or_init(|| Arc::new(Self::from_registry()))
            .clone()
    }

    /// 다른 저장소 구현으로 만든 인스턴스를 싱글톤으로 등록합니다.
    ///
    /// 이미 인스턴스가 있으면 기존 인스턴스를 그대로 반환합니다.
    pub fn install(service: Arc<Self>) -> Arc<Self> {
        POST_SERVICE_INSTANCE.get_or_init(|| service).clone()
    }

    pub fn new(
        posts: Arc<dyn PostStore>,
        users: Arc<dyn UserStore>,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        Self { posts, users, profiles }
    }

    fn from_registry() -> Self {
        Self::new(
            ServiceLocator::get::<PostRepository>(),
            ServiceLocator::get::<UserRepository>(),
            ServiceLocator::get::<ProfileRepository>(),
        )
    }

    pub async fn get_one(&self, post_id: &str) -> Result<PopulatedPost, AppError> {
        let post_id = parse_object_id(post_id)?;

        self.posts
            .load_post_with_authors(&post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NO_POST_FOUND.to_string()))
    }

    /// 전체 게시글, 최신순
    pub async fn get_all(&self) -> Result<Vec<PopulatedPost>, AppError> {
        self.posts.load_posts_with_authors(PostFilter::All).await
    }

    /// 특정 User가 작성한 게시글, 최신순
    ///
    /// 게시글이 하나도 없으면 `NotFound`입니다.
    pub async fn get_all_by_account(&self, user_id: &str) -> Result<Vec<PopulatedPost>, AppError> {
        let user_id = parse_object_id(user_id)?;

        let posts = self.posts
            .load_posts_with_authors(PostFilter::ByUser(user_id))
            .await?;

        if posts.is_empty() {
            return Err(AppError::NotFound(NO_ACCOUNT_FOUND.to_string()));
        }
        Ok(posts)
    }

    pub async fn create(
        &self,
        caller: &CallerIdentity,
        request: CreatePostRequest,
    ) -> Result<PopulatedPost, AppError> {
        let author = self.resolve_author(caller, true).await?;

        request.check()?;
        let (Some(title), Some(post_text)) = (request.title, request.post_text) else {
            return Err(AppError::ValidationError("\"title\" is required".to_string()));
        };

        let post = Post::new(title, post_text, author.profile_id, author.user_id);
        let created = self.posts.insert_post(post).await?;

        log::info!(
            "📝 게시글 생성: {} (작성자 프로필: {})",
            created.id.map(|id| id.to_hex()).unwrap_or_default(),
            author.profile_id
        );

        self.posts.populate_post(created).await
    }

    /// 값이 있는 필드만 반영하며, 작성자 치환 없이 저장된 문서를 반환합니다.
    pub async fn update(
        &self,
        caller: &CallerIdentity,
        post_id: &str,
        request: UpdatePostRequest,
    ) -> Result<Post, AppError> {
        let post_id = parse_object_id(post_id)?;
        let author = self.resolve_author(caller, false).await?;

        let mut post = self.find_post(&post_id, NO_POST_FOUND).await?;

        if !post.is_owned_by(&author.profile_id) {
            log::warn!("⚠️ 타인 게시글 수정 시도: post={}, profile={}", post_id, author.profile_id);
            return Err(AppError::Unauthorized(ONLY_UPDATE_OWN.to_string()));
        }

        request.check()?;

        if let Some(title) = request.title {
            post.title = title;
        }
        if let Some(post_text) = request.post_text {
            post.post_text = post_text;
        }
        post.updated_at = DateTime::now();

        if !self.posts.save_post(&post).await? {
            return Err(AppError::NotFound(NO_POST_FOUND.to_string()));
        }

        log::info!("✏️ 게시글 수정: {}", post_id);
        Ok(post)
    }

    pub async fn delete(&self, caller: &CallerIdentity, post_id: &str) -> Result<(), AppError> {
        let post_id = parse_object_id(post_id)?;
        let author = self.resolve_author(caller, false).await?;

        let post = self.find_post(&post_id, NO_POST_FOUND).await?;

        if !post.is_owned_by(&author.profile_id) {
            log::warn!("⚠️ 타인 게시글 삭제 시도: post={}, profile={}", post_id, author.profile_id);
            return Err(AppError::Unauthorized(ONLY_DELETE_OWN.to_string()));
        }

        if self.posts.delete_post(&post_id).await? == 0 {
            return Err(AppError::NotFound(CANT_FIND_POST.to_string()));
        }

        log::info!("🗑️ 게시글 삭제: {}", post_id);
        Ok(())
    }

    pub async fn add_comment(
        &self,
        caller: &CallerIdentity,
        post_id: &str,
        request: CreateCommentRequest,
    ) -> Result<PopulatedPost, AppError> {
        let post_id = parse_object_id(post_id)?;
        let author = self.resolve_author(caller, false).await?;

        let mut post = self.find_post(&post_id, NO_POST_FOUND_FOR_COMMENT).await?;

        request.check()?;
        let Some(comment_text) = request.comment_text else {
            return Err(AppError::ValidationError("\"commentText\" is required".to_string()));
        };

        let comment = Comment::new(comment_text, author.profile_id);
        let comment_id = comment.id;
        post.add_comment(comment);

        if !self.posts.save_post(&post).await? {
            return Err(AppError::NotFound(NO_POST_FOUND_FOR_COMMENT.to_string()));
        }

        log::info!("💬 댓글 작성: post={}, comment={}", post_id, comment_id);
        self.posts.populate_post(post).await
    }

    /// id가 `comment_id`와 일치하는 댓글을 제거하고 남은 댓글을 반환합니다.
    ///
    /// 작성자 확인을 하지 않으며, 일치하는 댓글이 없어도 성공합니다.
    pub async fn delete_comment(
        &self,
        post_id: &str,
        comment_id: Option<&str>,
    ) -> Result<Vec<PopulatedComment>, AppError> {
        let post_id = parse_object_id(post_id)?;

        let mut post = self.find_post(&post_id, NO_POST_FOUND_FOR_COMMENT).await?;

        let comment_id = comment_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::MissingParameter(COMMENT_ID_REQUIRED.to_string()))?;

        let removed = post.remove_comment(comment_id);

        if !self.posts.save_post(&post).await? {
            return Err(AppError::NotFound(NO_POST_FOUND_FOR_COMMENT.to_string()));
        }

        log::info!("🗑️ 댓글 삭제: post={}, comment={}, removed={}", post_id, comment_id, removed);

        let populated = self.posts.populate_post(post).await?;
        Ok(populated.comments)
    }

    async fn find_post(&self, post_id: &ObjectId, not_found: &str) -> Result<Post, AppError> {
        self.posts
            .find_post(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(not_found.to_string()))
    }

    /// 호출자의 프로필을 찾습니다. `require_user`이면 User 문서도 확인합니다.
    async fn resolve_author(&self, caller: &CallerIdentity, require_user: bool) -> Result<Author, AppError> {
        let user_id = caller.object_id()?;

        if require_user && self.users.find_user_by_id(&user_id).await?.is_none() {
            return Err(AppError::NotFound(NO_USER_FOUND.to_string()));
        }

        let profile = self.profiles
            .find_profile_by_user(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NO_PROFILE_FOUND.to_string()))?;

        let profile_id = profile
            .id
            .ok_or_else(|| AppError::InternalError("profile without id".to_string()))?;

        Ok(Author { user_id, profile_id })
    }
}

fn post_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(PostService::instance())
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "post_service",
        constructor: post_service_constructor,
    }
}
