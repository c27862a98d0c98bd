//! 계정/프로필 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::dto::validation::ValidatedRequest;
use crate::domain::entities::users::user_profile::ProfileChanges;
use crate::utils::string_utils::deserialize_optional_string;

/// 회원가입 요청
///
/// 비밀번호는 공백을 포함해 입력 그대로 사용합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "\"name\" is required"))]
    #[validate(length(min = 1, max = 32, message = "\"name\" length must be between 1 and 32 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "\"email\" is required"))]
    #[validate(email(message = "\"email\" must be a valid email"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(required(message = "\"password\" is required"))]
    #[validate(length(min = 6, message = "\"password\" length must be at least 6 characters long"))]
    pub password: Option<String>,
}

impl ValidatedRequest for SignupRequest {
    const FIELD_ORDER: &'static [&'static str] = &["name", "email", "password"];
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SigninRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "\"email\" is required"))]
    #[validate(email(message = "\"email\" must be a valid email"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(required(message = "\"password\" is required"))]
    #[validate(length(min = 1, message = "\"password\" is required"))]
    pub password: Option<String>,
}

impl ValidatedRequest for SigninRequest {
    const FIELD_ORDER: &'static [&'static str] = &["email", "password"];
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "\"email\" is required"))]
    #[validate(email(message = "\"email\" must be a valid email"))]
    pub email: Option<String>,
}

impl ValidatedRequest for ForgotPasswordRequest {
    const FIELD_ORDER: &'static [&'static str] = &["email"];
}

/// 비밀번호 재설정 요청
///
/// ```json
/// { "resetPasswordLink": "<token>", "newPassword": "secret1" }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "\"resetPasswordLink\" is required"))]
    pub reset_password_link: Option<String>,

    #[serde(default)]
    #[validate(required(message = "\"newPassword\" is required"))]
    #[validate(length(min = 6, message = "\"newPassword\" length must be at least 6 characters long"))]
    pub new_password: Option<String>,
}

impl ValidatedRequest for ResetPasswordRequest {
    const FIELD_ORDER: &'static [&'static str] = &["reset_password_link", "new_password"];
}

/// 프로필 부분 수정 요청
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 1, max = 32, message = "\"name\" length must be between 1 and 32 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 280, message = "\"bio\" length must be less than or equal to 280 characters long"))]
    pub bio: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 64, message = "\"location\" length must be less than or equal to 64 characters long"))]
    pub location: Option<String>,
}

impl ValidatedRequest for UpdateProfileRequest {
    const FIELD_ORDER: &'static [&'static str] = &["name", "bio", "location"];
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            name: request.name,
            bio: request.bio,
            location: request.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    fn first_error(result: Result<(), AppError>) -> String {
        match result {
            Err(AppError::ValidationError(msg)) => msg,
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_signup_reports_first_field_in_order() {
        let request: SignupRequest =
            serde_json::from_str(r#"{"email": "nope", "password": "123"}"#).unwrap();

        assert_eq!(first_error(request.check()), "\"name\" is required");
    }

    #[test]
    fn test_signup_email_and_password_rules() {
        let request = SignupRequest {
            name: Some("alice".into()),
            email: Some("not-an-email".into()),
            password: Some("secret1".into()),
        };
        assert_eq!(first_error(request.check()), "\"email\" must be a valid email");

        let request = SignupRequest {
            name: Some("alice".into()),
            email: Some("alice@example.com".into()),
            password: Some("12345".into()),
        };
        assert_eq!(
            first_error(request.check()),
            "\"password\" length must be at least 6 characters long"
        );
    }

    #[test]
    fn test_reset_password_request_camel_case() {
        let request: ResetPasswordRequest = serde_json::from_str(
            r#"{"resetPasswordLink": "token", "newPassword": "secret1"}"#,
        )
        .unwrap();

        assert_eq!(request.reset_password_link.as_deref(), Some("token"));
        assert!(request.check().is_ok());
    }

    #[test]
    fn test_update_profile_bounds() {
        let request = UpdateProfileRequest {
            bio: Some("b".repeat(281)),
            ..Default::default()
        };
        assert!(first_error(request.check()).starts_with("\"bio\""));

        let changes = ProfileChanges::from(UpdateProfileRequest {
            location: Some("Busan".into()),
            ..Default::default()
        });
        assert!(changes.name.is_none());
        assert_eq!(changes.location.as_deref(), Some("Busan"));
    }
}
