//! UserProfile Entity
//!
//! 게시글과 댓글의 작성자로 참조되는 프로필입니다 (`user_profiles` 컬렉션).
//! 회원가입 시 User와 1:1로 생성됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유 User 참조 (unique)
    pub user: ObjectId,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl UserProfile {
    pub fn new(user: ObjectId, name: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user,
            name,
            bio: String::new(),
            location: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// 프로필 부분 수정 내용
///
/// `None`인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.bio.is_none() && self.location.is_none()
    }

    /// 변경 내용을 프로필에 반영합니다.
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(bio) = &self.bio {
            profile.bio = bio.clone();
        }
        if let Some(location) = &self.location {
            profile.location = location.clone();
        }
        profile.updated_at = DateTime::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_changes_keeps_absent_fields() {
        let mut profile = UserProfile::new(ObjectId::new(), "alice".to_string());
        profile.bio = "hello".to_string();

        ProfileChanges {
            location: Some("Seoul".to_string()),
            ..Default::default()
        }
        .apply_to(&mut profile);

        assert_eq!(profile.name, "alice");
        assert_eq!(profile.bio, "hello");
        assert_eq!(profile.location, "Seoul");
    }
}
