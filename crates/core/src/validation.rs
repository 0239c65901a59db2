//! Field-level payload validation.
//!
//! Write endpoints validate their input before it reaches the store. Errors
//! are accumulated per field so the client receives every offending field in
//! a single 400 response rather than one at a time.

use serde::Serialize;

use crate::error::CoreError;

/// A single validation failure, naming the offending payload field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Accumulator for [`FieldError`]s.
///
/// ```
/// use kbase_core::validation::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.require("title", "");
/// assert!(errors.into_result().is_err());
/// ```
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an arbitrary failure for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// The field must be non-empty after trimming whitespace.
    pub fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "must not be empty");
        }
    }

    /// The field must not exceed `max` characters.
    pub fn max_len(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(field, format!("must be at most {max} characters"));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the accumulator: `Ok(())` if nothing was recorded, otherwise
    /// a [`CoreError::FieldValidation`] carrying every recorded error.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CoreError::FieldValidation(self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_accumulator_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn collects_all_offending_fields() {
        let mut errors = FieldErrors::new();
        errors.require("title", "   ");
        errors.require("content", "fine");
        errors.max_len("source", &"x".repeat(600), 500);

        let err = errors.into_result().unwrap_err();
        assert_matches!(err, CoreError::FieldValidation(ref fields) => {
            assert_eq!(fields.len(), 2);
            assert_eq!(fields[0].field, "title");
            assert_eq!(fields[1].field, "source");
        });
    }

    #[test]
    fn max_len_counts_characters_not_bytes() {
        let mut errors = FieldErrors::new();
        // Five multi-byte characters are still five characters.
        errors.max_len("name", "ééééé", 5);
        assert!(errors.into_result().is_ok());
    }
}
