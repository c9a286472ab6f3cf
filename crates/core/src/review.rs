//! Product review validation.

use crate::error::CoreError;

/// Minimum allowed rating value.
pub const MIN_RATING: i16 = 1;

/// Maximum allowed rating value.
pub const MAX_RATING: i16 = 5;

/// Maximum length for review content.
pub const MAX_CONTENT_LEN: usize = 5000;

/// Validate a rating value is within the allowed range.
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if rating < MIN_RATING || rating > MAX_RATING {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

/// Validate review content: non-empty and within length limit.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Review content must not be empty".to_string(),
        ));
    }
    if content.len() > MAX_CONTENT_LEN {
        return Err(CoreError::Validation(format!(
            "Review content too long: {} chars (max {MAX_CONTENT_LEN})",
            content.len()
        )));
    }
    Ok(())
}
