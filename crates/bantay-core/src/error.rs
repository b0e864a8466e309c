//! # Validation Errors
//!
//! Structured validation errors built with `thiserror`. Each variant
//! carries the offending field name and the limit that was exceeded, so
//! API responses can name the exact problem.

use thiserror::Error;

/// A create/update payload failed validation before reaching the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string field was empty or whitespace-only.
    #[error("{field} must not be empty")]
    EmptyField {
        /// The offending field name.
        field: &'static str,
    },

    /// A string field exceeded its declared maximum length.
    #[error("{field} must not exceed {max} characters")]
    TooLong {
        /// The offending field name.
        field: &'static str,
        /// The declared maximum length in characters.
        max: usize,
    },

    /// Violation severity outside the 1–5 scale.
    #[error("severity must be between 1 and 5, got {0}")]
    SeverityOutOfRange(i32),

    /// A persisted enum column held a value no variant maps to.
    #[error("unknown {field} value: {value:?}")]
    UnknownVariant {
        /// The enum column name.
        field: &'static str,
        /// The unrecognized stored value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = ValidationError::TooLong {
            field: "business_name",
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "business_name must not exceed 100 characters"
        );
    }

    #[test]
    fn severity_message_includes_value() {
        assert_eq!(
            ValidationError::SeverityOutOfRange(6).to_string(),
            "severity must be between 1 and 5, got 6"
        );
    }
}
