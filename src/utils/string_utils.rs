//! # 문자열 유틸리티
//!
//! 요청 페이로드의 문자열 필드를 정리하는 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 정리
///
/// 앞뒤 공백을 제거하고, 비어 있으면 `None`으로 바꿉니다.
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열, 공백 문자열, `null`은 모두 `None`이 되므로
/// 검증 계층에서는 "값이 있는가"와 "길이가 범위 안인가"만 확인하면 됩니다.
/// 필드가 아예 없는 경우를 위해 `#[serde(default)]`와 함께 사용합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct CreatePostRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     title: Option<String>,
/// }
///
/// // {"title": "  Hello  "} → Some("Hello")
/// // {"title": ""}          → None
/// // {}                     → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some(" \t\n ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            title: Option<String>,
        }

        let trimmed: Payload = serde_json::from_str(r#"{"title": "  Hello World  "}"#).unwrap();
        assert_eq!(trimmed.title.as_deref(), Some("Hello World"));

        let blank: Payload = serde_json::from_str(r#"{"title": "   "}"#).unwrap();
        assert!(blank.title.is_none());

        let null: Payload = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(null.title.is_none());

        let missing: Payload = serde_json::from_str("{}").unwrap();
        assert!(missing.title.is_none());
    }
}
