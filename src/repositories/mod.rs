//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 [`store`]의 트레이트(`PostStore`, `UserStore`, `ProfileStore`)에만 의존하고,
//! 실제 구현은 기동 시 선택됩니다.
//!
//! | 구현 | 선택 | 비고 |
//! |------|------|------|
//! | [`posts::PostRepository`], [`users::UserRepository`], [`profiles::ProfileRepository`] | `STORAGE_BACKEND=mongo` (기본) | `inventory`로 등록, 기동 시 인덱스 생성 |
//! | [`memory::MemoryStore`] | `STORAGE_BACKEND=memory`, 테스트 | 세 트레이트를 모두 구현 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::posts::PostRepository;
//! use crate::repositories::store::PostStore;
//!
//! let posts = ServiceLocator::get::<PostRepository>();
//! let post = posts.load_post_with_authors(&id).await?;
//! ```

pub mod store;
pub mod memory;
pub mod posts;
pub mod users;
pub mod profiles;
