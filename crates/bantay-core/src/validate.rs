//! # Payload Validation
//!
//! The [`Validate`] trait is implemented by every create/update payload.
//! Validation runs at the API boundary, before any store interaction, so
//! a rejected payload never touches the database.

use crate::error::ValidationError;

/// Business-rule validation beyond what serde deserialization checks.
pub trait Validate {
    /// Validate the payload's business rules.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Reject an empty or whitespace-only required string.
pub(crate) fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

/// Reject a string longer than `max` characters.
pub(crate) fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Reject a severity outside the inclusive 1–5 scale.
pub(crate) fn severity_in_range(severity: i32) -> Result<(), ValidationError> {
    if !(1..=5).contains(&severity) {
        return Err(ValidationError::SeverityOutOfRange(severity));
    }
    Ok(())
}
