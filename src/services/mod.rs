//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 `OnceCell` 싱글톤이며 `inventory`로 서비스 레지스트리에 등록됩니다.
//! 저장소는 트레이트 객체로 주입되므로 MongoDB 리포지토리와 `MemoryStore`를 바꿔 끼울 수 있습니다.
//!
//! - [`posts::PostService`]: 게시글/댓글
//! - [`users::UserService`]: 회원가입, 로그인, 비밀번호 재설정 ([`users::ResetLinkSender`]로 링크 전달)
//! - [`profiles::ProfileService`]: 작성자 프로필
//! - [`auth::TokenService`]: JWT 발급/검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::posts::PostService;
//!
//! let post_service = PostService::instance();
//! let posts = post_service.get_all().await?;
//! ```

pub mod auth;
pub mod posts;
pub mod profiles;
pub mod users;

use std::sync::Arc;
use crate::config::PasswordConfig;
use crate::repositories::memory::MemoryStore;

/// 모든 서비스 싱글톤을 하나의 [`MemoryStore`] 위에 설치합니다.
///
/// `STORAGE_BACKEND=memory`로 서버를 띄우거나 HTTP 핸들러를 테스트할 때 사용합니다.
/// 이미 초기화된 싱글톤은 바뀌지 않습니다.
pub fn install_memory_backend(store: Arc<MemoryStore>) {
    install_memory_backend_with_cost(store, PasswordConfig::bcrypt_cost());
}

pub fn install_memory_backend_with_cost(store: Arc<MemoryStore>, bcrypt_cost: u32) {
    posts::PostService::install(Arc::new(posts::PostService::new(
        store.clone(),
        store.clone(),
        store.clone(),
    )));
    profiles::ProfileService::install(Arc::new(profiles::ProfileService::new(store.clone())));
    users::UserService::install(Arc::new(users::UserService::new(
        store.clone(),
        store,
        auth::TokenService::instance(),
        Arc::new(users::LoggingResetLinkSender),
        bcrypt_cost,
    )));
}
