//! Validation rules for issues.

use crate::error::CoreError;
use crate::validation::FieldErrors;

/// Maximum length for an issue title (characters).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for the short description and the full content body.
pub const MAX_BODY_LENGTH: usize = 20_000;

/// Validate an issue creation payload.
///
/// The `topic_id` reference is checked by the store, not here; this only
/// covers the free-text fields.
pub fn validate(title: &str, description: &str, content: &str) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    errors.require("title", title);
    errors.max_len("title", title, MAX_TITLE_LENGTH);
    errors.require("description", description);
    errors.max_len("description", description, MAX_BODY_LENGTH);
    errors.require("content", content);
    errors.max_len("content", content, MAX_BODY_LENGTH);
    errors.into_result()
}
