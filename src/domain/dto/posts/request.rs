//! 게시글/댓글 요청 DTO
//!
//! 모든 문자열 필드는 [`deserialize_optional_string`]으로 앞뒤 공백이 제거되며,
//! 빈 값은 `None`이 됩니다. 따라서 `required`는 "비어 있지 않음"을 뜻합니다.

use serde::Deserialize;
use validator::Validate;
use crate::domain::dto::validation::ValidatedRequest;
use crate::utils::string_utils::deserialize_optional_string;

pub const TITLE_MAX: u64 = 120;
pub const POST_TEXT_MAX: u64 = 5000;
pub const COMMENT_TEXT_MAX: u64 = 1000;

/// 게시글 작성 요청
///
/// ```json
/// { "title": "Hello", "postText": "First post" }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "\"title\" is required"))]
    #[validate(length(min = 1, max = TITLE_MAX, message = "\"title\" length must be between 1 and 120 characters"))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "\"postText\" is required"))]
    #[validate(length(min = 1, max = POST_TEXT_MAX, message = "\"postText\" length must be between 1 and 5000 characters"))]
    pub post_text: Option<String>,
}

impl ValidatedRequest for CreatePostRequest {
    const FIELD_ORDER: &'static [&'static str] = &["title", "post_text"];
}

/// 게시글 부분 수정 요청
///
/// 값이 있는 필드만 반영됩니다. 빈 문자열은 "변경 없음"으로 취급합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 1, max = TITLE_MAX, message = "\"title\" length must be between 1 and 120 characters"))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 1, max = POST_TEXT_MAX, message = "\"postText\" length must be between 1 and 5000 characters"))]
    pub post_text: Option<String>,
}

impl ValidatedRequest for UpdatePostRequest {
    const FIELD_ORDER: &'static [&'static str] = &["title", "post_text"];
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "\"commentText\" is required"))]
    #[validate(length(min = 1, max = COMMENT_TEXT_MAX, message = "\"commentText\" length must be between 1 and 1000 characters"))]
    pub comment_text: Option<String>,
}

impl ValidatedRequest for CreateCommentRequest {
    const FIELD_ORDER: &'static [&'static str] = &["comment_text"];
}

/// 댓글 삭제 요청 (`DELETE /api/post/{id}/comment` 본문)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteCommentRequest {
    #[serde(rename = "commentID", default, deserialize_with = "deserialize_optional_string")]
    pub comment_id: Option<String>,
}
