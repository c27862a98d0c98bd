//! In-memory document store
//!
//! MongoDB 없이 서버를 띄우거나(`STORAGE_BACKEND=memory`) 서비스를 테스트할 때 사용합니다.
//! 프로세스가 종료되면 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::core::errors::AppError;
use crate::domain::entities::posts::post::Post;
use crate::domain::entities::users::{user::User, user_profile::{ProfileChanges, UserProfile}};
use crate::repositories::store::{PostFilter, PostStore, ProfileStore, UserStore, EMAIL_TAKEN};

/// `users`, `user_profiles`, `posts` 세 컬렉션을 HashMap으로 흉내 내는 저장소
#[derive(Default)]
pub struct MemoryStore {
    posts: RwLock<HashMap<ObjectId, Post>>,
    users: RwLock<HashMap<ObjectId, User>>,
    profiles: RwLock<HashMap<ObjectId, UserProfile>>,
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, AppError> {
    lock.read()
        .map_err(|_| AppError::InternalError("memory store lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, AppError> {
    lock.write()
        .map_err(|_| AppError::InternalError("memory store lock poisoned".to_string()))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_count(&self) -> usize {
        self.posts.read().map(|posts| posts.len()).unwrap_or_default()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn find_post(&self, id: &ObjectId) -> Result<Option<Post>, AppError> {
        Ok(read(&self.posts)?.get(id).cloned())
    }

    async fn find_posts(&self, filter: PostFilter) -> Result<Vec<Post>, AppError> {
        let mut posts: Vec<Post> = read(&self.posts)?
            .values()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect();

        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts)
    }

    async fn insert_post(&self, mut post: Post) -> Result<Post, AppError> {
        let id = ObjectId::new();
        post.id = Some(id);
        write(&self.posts)?.insert(id, post.clone());
        Ok(post)
    }

    async fn save_post(&self, post: &Post) -> Result<bool, AppError> {
        let Some(id) = post.id else {
            return Ok(false);
        };

        let mut posts = write(&self.posts)?;
        match posts.get_mut(&id) {
            Some(stored) => {
                *stored = post.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_post(&self, id: &ObjectId) -> Result<u64, AppError> {
        Ok(write(&self.posts)?.remove(id).map_or(0, |_| 1))
    }

    async fn find_authors(&self, ids: &[ObjectId]) -> Result<Vec<UserProfile>, AppError> {
        let profiles = read(&self.profiles)?;
        Ok(ids.iter().filter_map(|id| profiles.get(id).cloned()).collect())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(read(&self.users)?.get(id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.to_lowercase();
        Ok(read(&self.users)?.values().find(|user| user.email == email).cloned())
    }

    async fn find_user_by_reset_link(&self, link: &str) -> Result<Option<User>, AppError> {
        if link.is_empty() {
            return Ok(None);
        }
        Ok(read(&self.users)?
            .values()
            .find(|user| user.reset_password_link == link)
            .cloned())
    }

    async fn insert_user(&self, mut user: User) -> Result<User, AppError> {
        let mut users = write(&self.users)?;
        if users.values().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError(EMAIL_TAKEN.to_string()));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn set_reset_link(&self, id: &ObjectId, link: &str) -> Result<bool, AppError> {
        let mut users = write(&self.users)?;
        Ok(match users.get_mut(id) {
            Some(user) => {
                user.reset_password_link = link.to_string();
                user.updated_at = DateTime::now();
                true
            }
            None => false,
        })
    }

    async fn set_password(&self, id: &ObjectId, password_hash: &str) -> Result<bool, AppError> {
        let mut users = write(&self.users)?;
        Ok(match users.get_mut(id) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.reset_password_link.clear();
                user.updated_at = DateTime::now();
                true
            }
            None => false,
        })
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_profile_by_user(&self, user_id: &ObjectId) -> Result<Option<UserProfile>, AppError> {
        Ok(read(&self.profiles)?
            .values()
            .find(|profile| &profile.user == user_id)
            .cloned())
    }

    async fn insert_profile(&self, mut profile: UserProfile) -> Result<UserProfile, AppError> {
        let mut profiles = write(&self.profiles)?;
        if profiles.values().any(|existing| existing.user == profile.user) {
            return Err(AppError::ConflictError("Profile already exists".to_string()));
        }

        let id = ObjectId::new();
        profile.id = Some(id);
        profiles.insert(id, profile.clone());
        Ok(profile)
    }

    async fn update_profile(
        &self,
        user_id: &ObjectId,
        changes: ProfileChanges,
    ) -> Result<Option<UserProfile>, AppError> {
        let mut profiles = write(&self.profiles)?;
        Ok(profiles
            .values_mut()
            .find(|profile| &profile.user == user_id)
            .map(|profile| {
                changes.apply_to(profile);
                profile.clone()
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_at(millis: i64, user: ObjectId) -> Post {
        let mut post = Post::new(format!("post {}", millis), "text".into(), ObjectId::new(), user);
        post.created_at = DateTime::from_millis(millis);
        post
    }

    #[actix_web::test]
    async fn test_find_posts_sorted_newest_first() {
        let store = MemoryStore::new();
        let user = ObjectId::new();
        for millis in [2_000, 1_000, 3_000] {
            store.insert_post(post_at(millis, user)).await.unwrap();
        }

        let posts = store.find_posts(PostFilter::All).await.unwrap();
        let order: Vec<_> = posts.iter().map(|p| p.created_at.timestamp_millis()).collect();

        assert_eq!(order, vec![3_000, 2_000, 1_000]);
    }

    #[actix_web::test]
    async fn test_find_posts_by_user() {
        let store = MemoryStore::new();
        let alice = ObjectId::new();
        store.insert_post(post_at(1, alice)).await.unwrap();
        store.insert_post(post_at(2, ObjectId::new())).await.unwrap();

        let posts = store.find_posts(PostFilter::ByUser(alice)).await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user, alice);
    }

    #[actix_web::test]
    async fn test_save_and_delete_unknown_post() {
        let store = MemoryStore::new();
        let mut ghost = post_at(1, ObjectId::new());
        ghost.id = Some(ObjectId::new());

        assert!(!store.save_post(&ghost).await.unwrap());
        assert_eq!(store.delete_post(&ghost.id.unwrap()).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_duplicate_email_conflict() {
        let store = MemoryStore::new();
        store.insert_user(User::new("a".into(), "a@example.com".into(), "h".into())).await.unwrap();

        let result = store
            .insert_user(User::new("b".into(), "A@Example.com".into(), "h".into()))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_set_password_clears_reset_link() {
        let store = MemoryStore::new();
        let user = store
            .insert_user(User::new("a".into(), "a@example.com".into(), "old".into()))
            .await
            .unwrap();
        let id = user.id.unwrap();

        store.set_reset_link(&id, "token").await.unwrap();
        assert!(store.find_user_by_reset_link("token").await.unwrap().is_some());

        store.set_password(&id, "new").await.unwrap();
        let user = store.find_user_by_id(&id).await.unwrap().unwrap();

        assert_eq!(user.password_hash, "new");
        assert!(!user.has_pending_reset());
        assert!(store.find_user_by_reset_link("token").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_load_post_with_authors() {
        let store = MemoryStore::new();
        let user = ObjectId::new();
        let profile = store.insert_profile(UserProfile::new(user, "alice".into())).await.unwrap();
        let post = Post::new("t".into(), "p".into(), profile.id.unwrap(), user);
        let post = store.insert_post(post).await.unwrap();

        let populated = store.load_post_with_authors(&post.id.unwrap()).await.unwrap().unwrap();

        assert_eq!(populated.posted_by.map(|p| p.name), Some("alice".to_string()));
    }
}
