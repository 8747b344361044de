//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so the column caps are
//! checked here before anything reaches the store.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Names, locations, seats descriptions, coffee prices
pub const MAX_TEXT_LEN: usize = 250;

/// Map / image URLs
pub const MAX_URL_LEN: usize = 500;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_overlong() {
        assert!(validate_required_text("Old Spike", "name", MAX_TEXT_LEN).is_ok());
        assert!(validate_required_text("", "name", MAX_TEXT_LEN).is_err());
        assert!(validate_required_text("   ", "name", MAX_TEXT_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(251), "name", MAX_TEXT_LEN).is_err());
    }

    #[test]
    fn optional_text_allows_absent_values() {
        assert!(validate_optional_text(&None, "coffee_price", MAX_TEXT_LEN).is_ok());
        assert!(validate_optional_text(&Some("£2.80".into()), "coffee_price", MAX_TEXT_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(251)), "coffee_price", MAX_TEXT_LEN).is_err());
    }
}
