//! 입력 검증 유틸리티
//!
//! `validator` 크레이트의 선언적 규칙 결과(`ValidationErrors`)를
//! 필드별 위반 목록([`FieldViolation`])으로 평탄화합니다.
//! 서비스 계층은 저장소를 호출하기 전에 항상 [`ensure_valid`]를 거칩니다.
//!
//! ```rust,ignore
//! let violations = violations_of(&request);
//! if !violations.is_empty() {
//!     // [FieldViolation { field: "email", message: "Please enter a valid email address" }]
//! }
//! ```

use serde::Serialize;
use validator::Validate;
use crate::errors::AppError;

/// 단일 필드 검증 위반
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// 값에 선언된 모든 규칙을 평가하고 위반 목록을 반환합니다.
///
/// 위반이 없으면 빈 벡터를 반환합니다. 결과는 필드명 기준으로 정렬됩니다.
pub fn violations_of<T: Validate>(value: &T) -> Vec<FieldViolation> {
    let errors = match value.validate() {
        Ok(()) => return Vec::new(),
        Err(errors) => errors,
    };

    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |error| FieldViolation {
                field: field.clone(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            })
        })
        .collect();

    violations.sort();
    violations
}

/// 위반이 하나라도 있으면 [`AppError::ValidationError`]로 변환합니다.
///
/// 메시지는 `field: message` 항목을 `; `로 연결한 형태입니다.
pub fn ensure_valid<T: Validate>(value: &T) -> Result<(), AppError> {
    let violations = violations_of(value);

    if violations.is_empty() {
        return Ok(());
    }

    let message = violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ");

    Err(AppError::ValidationError(message))
}
