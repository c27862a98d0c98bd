//! 계정/프로필 응답 DTO
//!
//! 비밀번호 해시와 재설정 링크는 어떤 응답에도 포함되지 않습니다.

use serde::Serialize;
use crate::domain::entities::users::{user::User, user_profile::UserProfile};
use crate::utils::object_id::format_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub name: String,
    pub bio: String,
    pub location: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: profile.user.to_hex(),
            name: profile.name,
            bio: profile.bio,
            location: profile.location,
            created_at: format_timestamp(profile.created_at),
            updated_at: format_timestamp(profile.updated_at),
        }
    }
}

/// 로그인 응답에 포함되는 최소 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for AccountSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SigninResponse {
    pub token: String,
    pub user: AccountSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_signin_response_hides_credentials() {
        let mut user = User::new("alice".into(), "Alice@Example.com".into(), "$2b$hash".into());
        user.id = Some(ObjectId::new());
        user.reset_password_link = "pending".into();

        let json = serde_json::to_value(SigninResponse {
            token: "jwt".into(),
            user: AccountSummary::from(&user),
        })
        .unwrap();

        assert_eq!(json["user"]["email"], "alice@example.com");
        assert!(json["user"].get("passwordHash").is_none());
        assert!(json["user"].get("resetPasswordLink").is_none());
    }
}
