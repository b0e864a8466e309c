//! # Request Extraction Helpers
//!
//! Helpers that turn Axum JSON extraction results into [`AppError`]s and
//! run payload validation before a handler touches the store.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use bantay_core::Validate;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to
/// [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and validate it via [`Validate`].
///
/// Combines deserialization error mapping with business rule validation,
/// so a payload that fails either never reaches the store.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bantay_core::ValidationError;

    struct Payload {
        name: String,
    }

    impl Validate for Payload {
        fn validate(&self) -> Result<(), ValidationError> {
            if self.name.is_empty() {
                return Err(ValidationError::EmptyField { field: "name" });
            }
            Ok(())
        }
    }

    #[test]
    fn validated_extraction_rejects_rule_violations() {
        let result = extract_validated_json(Ok(Json(Payload {
            name: String::new(),
        })));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn validated_extraction_passes_valid_payloads() {
        let result = extract_validated_json(Ok(Json(Payload {
            name: "Aling Nena".to_string(),
        })));
        assert!(result.is_ok());
    }
}
