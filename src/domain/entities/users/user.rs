//! User Entity Implementation
//!
//! 로그인 자격 증명을 보유하는 계정 엔티티입니다 (`users` 컬렉션).
//! 게시글 도메인에서의 표시 정보는 [`UserProfile`](super::user_profile::UserProfile)이 담당합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 로그인 이메일 (unique, 소문자로 저장)
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 대기 중인 비밀번호 재설정 토큰, 없으면 빈 문자열
    #[serde(default)]
    pub reset_password_link: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email: email.to_lowercase(),
            password_hash,
            reset_password_link: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn has_pending_reset(&self) -> bool {
        !self.reset_password_link.is_empty()
    }
}
