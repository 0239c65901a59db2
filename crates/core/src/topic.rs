//! Validation rules for topics.

use crate::error::CoreError;
use crate::validation::FieldErrors;

/// Maximum length for a topic name (characters).
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for a topic description (characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;

/// Validate a topic creation payload.
pub fn validate(name: &str, description: Option<&str>) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    errors.require("name", name);
    errors.max_len("name", name, MAX_NAME_LENGTH);
    if let Some(description) = description {
        errors.max_len("description", description, MAX_DESCRIPTION_LENGTH);
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_topic() {
        assert!(validate("Economic Development", Some("Markets and growth")).is_ok());
        assert!(validate("Politics", None).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        assert!(validate("  ", None).is_err());
    }

    #[test]
    fn rejects_oversized_description() {
        let long = "d".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert!(validate("Tech", Some(&long)).is_err());
    }
}
