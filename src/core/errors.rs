//! # Application Error Handling System
//!
//! 게시글/댓글/계정 API 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 에러 메시지를 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 `{"error": "<message>"}` 형태의 JSON 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidIdentifier` | 400 Bad Request | ObjectId 형식이 아닌 식별자 |
//! | `NotFound` | 400 Bad Request | 게시글/프로필/계정 없음 |
//! | `ValidationError` | 400 Bad Request | 스키마 검증 실패 (첫 번째 위반 메시지) |
//! | `MissingParameter` | 400 Bad Request | 필수 요청 파라미터 누락 |
//! | `Unauthorized` | 401 Unauthorized | 게시글 소유자가 아님 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰/자격 증명 실패 |
//! | `ConflictError` | 409 Conflict | 이메일 중복 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! `NotFound`가 404가 아닌 400으로 매핑되는 것은 기존 클라이언트가 기대하는 응답 규약입니다.
//!
//! 500 계열 에러는 상세 내용을 로그에만 남기고 클라이언트에는 일반 메시지만 전달합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn get_post(id: &str) -> Result<Post, AppError> {
//!     let object_id = parse_object_id(id)?;
//!     store.find_post(&object_id).await?
//!         .ok_or_else(|| AppError::NotFound("No post found!".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    MissingParameter(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    AuthenticationError(String),

    #[error("{0}")]
    ConflictError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 노출되는 메시지
    ///
    /// 서버 내부 에러는 상세 원인을 숨깁니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Something went wrong. Try later".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier(_)
            | AppError::NotFound(_)
            | AppError::ValidationError(_)
            | AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("❌ {}", self);
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::ResponseError;

    fn body_json(error: &AppError) -> serde_json::Value {
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_client_errors_map_to_bad_request() {
        for error in [
            AppError::InvalidIdentifier("Invalid ObjectId!".to_string()),
            AppError::NotFound("No post found!".to_string()),
            AppError::ValidationError("\"title\" is required".to_string()),
            AppError::MissingParameter("Comment ID required!".to_string()),
        ] {
            assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_ownership_error_response() {
        let error = AppError::Unauthorized("Only update your posts!".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(&error)["error"], "Only update your posts!");
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let error = AppError::ValidationError("\"postText\" is required".to_string());

        assert_eq!(body_json(&error), serde_json::json!({ "error": "\"postText\" is required" }));
    }

    #[test]
    fn test_internal_error_is_masked() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(&error);
        assert!(!body["error"].as_str().unwrap().contains("10.0.0.3"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
