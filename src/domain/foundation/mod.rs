//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary shared by the questionnaire, signal and trade-off modules.

mod errors;
mod ids;
mod percentage;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AlternativeId, ComponentId, OptionId, SignalDefinitionId, SignalId};
pub use percentage::Percentage;

/// Rejects NaN and infinities for a named numeric field.
pub fn ensure_finite(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::not_finite(field))
    }
}

/// Rejects blank text, returning the trimmed value.
pub fn ensure_not_blank(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}
