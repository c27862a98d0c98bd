//! ObjectId 파싱 및 타임스탬프 포맷 헬퍼

use mongodb::bson::{oid::ObjectId, DateTime};
use crate::core::errors::AppError;

pub const INVALID_OBJECT_ID: &str = "Invalid ObjectId!";

/// 경로 파라미터 등 외부 입력을 ObjectId로 변환합니다.
///
/// 24자리 16진수가 아니면 저장소에 접근하기 전에 `InvalidIdentifier`로 실패합니다.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::InvalidIdentifier(INVALID_OBJECT_ID.to_string()))
}

/// 응답용 RFC 3339 문자열
pub fn format_timestamp(value: DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_object_id() {
        let id = parse_object_id("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_parse_invalid_object_id() {
        for raw in ["", "123", "not-an-object-id", "507f1f77bcf86cd79943901z", "507f1f77bcf86cd7994390111", " 507f1f77bcf86cd799439011", "507f1f77bcf86cd799439011\n"] {
            match parse_object_id(raw) {
                Err(AppError::InvalidIdentifier(msg)) => assert_eq!(msg, INVALID_OBJECT_ID),
                other => panic!("expected InvalidIdentifier for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_format_timestamp() {
        let epoch = DateTime::from_millis(0);
        assert_eq!(format_timestamp(epoch), "1970-01-01T00:00:00Z");
    }
}
