//! # 문서 저장소 계약
//!
//! 서비스 계층이 의존하는 저장소 인터페이스입니다. MongoDB 리포지토리와
//! [`MemoryStore`](super::memory::MemoryStore)가 같은 계약을 구현합니다.
//!
//! 작성자 치환(populate)은 기본 구현으로 제공되며 `find_post`와 `find_authors`만
//! 사용하므로, 조인을 지원하지 않는 저장소에서도 그대로 동작합니다.

use std::collections::HashMap;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;
use crate::domain::entities::posts::post::{PopulatedPost, Post};
use crate::domain::entities::users::{user::User, user_profile::{ProfileChanges, UserProfile}};

/// 게시글 목록 조회 조건
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostFilter {
    All,
    /// `user` 필드(User id)가 일치하는 게시글
    ByUser(ObjectId),
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            PostFilter::All => true,
            PostFilter::ByUser(user_id) => &post.user == user_id,
        }
    }
}

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_post(&self, id: &ObjectId) -> Result<Option<Post>, AppError>;

    /// `createdAt` 내림차순, 같으면 `_id` 내림차순
    async fn find_posts(&self, filter: PostFilter) -> Result<Vec<Post>, AppError>;

    /// 새 id를 부여해 저장하고 저장된 문서를 반환합니다.
    async fn insert_post(&self, post: Post) -> Result<Post, AppError>;

    /// 문서 전체를 교체합니다. 일치하는 문서가 없으면 `false`.
    async fn save_post(&self, post: &Post) -> Result<bool, AppError>;

    /// 삭제된 문서 수
    async fn delete_post(&self, id: &ObjectId) -> Result<u64, AppError>;

    /// 주어진 id의 프로필들 (없는 id는 결과에서 빠집니다)
    async fn find_authors(&self, ids: &[ObjectId]) -> Result<Vec<UserProfile>, AppError>;

    async fn author_map(&self, ids: &[ObjectId]) -> Result<HashMap<ObjectId, UserProfile>, AppError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let authors = self.find_authors(ids).await?;
        Ok(authors
            .into_iter()
            .filter_map(|profile| profile.id.map(|id| (id, profile)))
            .collect())
    }

    async fn populate_post(&self, post: Post) -> Result<PopulatedPost, AppError> {
        let authors = self.author_map(&post.author_ids()).await?;
        Ok(post.populate(&authors))
    }

    async fn load_post_with_authors(&self, id: &ObjectId) -> Result<Option<PopulatedPost>, AppError> {
        match self.find_post(id).await? {
            Some(post) => Ok(Some(self.populate_post(post).await?)),
            None => Ok(None),
        }
    }

    async fn load_posts_with_authors(&self, filter: PostFilter) -> Result<Vec<PopulatedPost>, AppError> {
        let posts = self.find_posts(filter).await?;

        let mut ids: Vec<ObjectId> = Vec::new();
        for id in posts.iter().flat_map(Post::author_ids) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        let authors = self.author_map(&ids).await?;
        Ok(posts.into_iter().map(|post| post.populate(&authors)).collect())
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    /// 이메일은 소문자로 비교합니다.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_user_by_reset_link(&self, link: &str) -> Result<Option<User>, AppError>;

    /// 이메일이 이미 있으면 `ConflictError`
    async fn insert_user(&self, user: User) -> Result<User, AppError>;

    async fn set_reset_link(&self, id: &ObjectId, link: &str) -> Result<bool, AppError>;

    /// 비밀번호 해시를 바꾸고 재설정 링크를 비웁니다.
    async fn set_password(&self, id: &ObjectId, password_hash: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_profile_by_user(&self, user_id: &ObjectId) -> Result<Option<UserProfile>, AppError>;

    async fn insert_profile(&self, profile: UserProfile) -> Result<UserProfile, AppError>;

    /// 변경 후 문서를 반환합니다. 프로필이 없으면 `None`.
    async fn update_profile(
        &self,
        user_id: &ObjectId,
        changes: ProfileChanges,
    ) -> Result<Option<UserProfile>, AppError>;
}

/// 이메일 중복 시 사용자에게 보여줄 메시지
pub const EMAIL_TAKEN: &str = "Email is taken";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_filter_matches_user() {
        let user = ObjectId::new();
        let post = Post::new("t".into(), "p".into(), ObjectId::new(), user);

        assert!(PostFilter::All.matches(&post));
        assert!(PostFilter::ByUser(user).matches(&post));
        assert!(!PostFilter::ByUser(ObjectId::new()).matches(&post));
    }
}
