//! # 요청 검증 결과
//!
//! `validator` crate의 [`ValidationErrors`]를 필드 선언 순서대로 정렬된
//! [`FieldViolation`] 목록으로 변환합니다. `ValidationErrors`는 필드를 `HashMap`으로
//! 보관하므로, 그대로 사용하면 "첫 번째 위반"이 호출마다 달라질 수 있습니다.
//!
//! ```rust,ignore
//! #[derive(Deserialize, Validate)]
//! pub struct CreatePostRequest { /* title, post_text */ }
//!
//! impl ValidatedRequest for CreatePostRequest {
//!     const FIELD_ORDER: &'static [&'static str] = &["title", "post_text"];
//! }
//!
//! payload.check()?; // 실패 시 AppError::ValidationError(첫 번째 메시지)
//! ```

use serde::Serialize;
use validator::{Validate, ValidationErrors};
use crate::core::errors::AppError;

/// 단일 필드 규칙 위반
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    /// 실패한 규칙 (`required`, `length`, `email` ...)
    pub code: String,
    pub message: String,
}

/// 필드 선언 순서로 정렬된 위반 목록
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn from_errors(errors: &ValidationErrors, field_order: &[&str]) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field: &str = field.as_ref();
                let field = field.to_string();

                field_errors.iter().map(move |error| FieldViolation {
                    field: field.clone(),
                    code: error.code.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("\"{}\" is invalid", field)),
                })
            })
            .collect();

        // 같은 필드 안의 순서는 유지 (stable sort)
        violations.sort_by_key(|violation| field_position(field_order, &violation.field));

        Self { violations }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn first_message(&self) -> Option<&str> {
        self.violations.first().map(|violation| violation.message.as_str())
    }
}

impl From<ValidationReport> for AppError {
    fn from(report: ValidationReport) -> Self {
        AppError::ValidationError(
            report
                .first_message()
                .unwrap_or("Invalid request body")
                .to_string(),
        )
    }
}

/// 필드 순서가 고정된 검증 가능 요청
pub trait ValidatedRequest: Validate {
    /// 위반 보고 순서 (Rust 필드명 기준)
    const FIELD_ORDER: &'static [&'static str];

    fn report(&self) -> ValidationReport {
        match self.validate() {
            Ok(()) => ValidationReport::default(),
            Err(errors) => ValidationReport::from_errors(&errors, Self::FIELD_ORDER),
        }
    }

    fn check(&self) -> Result<(), AppError> {
        let report = self.report();
        if report.is_empty() {
            Ok(())
        } else {
            Err(report.into())
        }
    }
}

/// validator는 Rust 필드명 또는 serde 이름으로 보고할 수 있으므로 둘 다 같은 키로 맞춥니다.
fn field_position(field_order: &[&str], field: &str) -> usize {
    let key = normalize_field(field);
    field_order
        .iter()
        .position(|candidate| normalize_field(candidate) == key)
        .unwrap_or(field_order.len())
}

fn normalize_field(field: &str) -> String {
    field.replace('_', "").to_ascii_lowercase()
}
