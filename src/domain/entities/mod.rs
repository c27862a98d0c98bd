//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 대응되는 문서 구조체입니다.
//!
//! | 엔티티 | 컬렉션 | 비고 |
//! |--------|--------|------|
//! | [`users::user::User`] | `users` | 로그인 자격 증명 |
//! | [`users::user_profile::UserProfile`] | `user_profiles` | 작성자 표시 정보 |
//! | [`posts::post::Post`] | `posts` | 댓글(`Comment`)을 내장 |
//!
//! 모든 필드는 camelCase로 직렬화되고, 식별자는 `_id`에 매핑됩니다.
//! `id`가 `None`인 문서는 아직 저장되지 않은 상태입니다.

pub mod users;
pub mod posts;

pub use users::{ProfileChanges, User, UserProfile};
pub use posts::{Comment, PopulatedComment, PopulatedPost, Post};
