//! Product catalog validation and naming helpers.
//!
//! Provides the product status lifecycle constants, field validation for
//! vendor-submitted products, and slug generation for catalog URLs.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Product status lifecycle
   -------------------------------------------------------------------------- */

/// Not yet submitted for listing.
pub const STATUS_DRAFT: &str = "draft";

/// Submitted, pending moderation.
pub const STATUS_WAITING_APPROVAL: &str = "waitingapproval";

/// Publicly listed.
pub const STATUS_ACTIVE: &str = "active";

/// Soft-deleted by its vendor. Rows are never physically removed so order
/// history keeps resolving.
pub const STATUS_DELETED: &str = "deleted";

/// All valid product status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_WAITING_APPROVAL,
    STATUS_ACTIVE,
    STATUS_DELETED,
];

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a product or category title.
pub const MAX_TITLE_LEN: usize = 50;

/// Maximum length for a product description.
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate that `status` is one of the allowed lifecycle values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate a product title: non-empty and within length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Product title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Product title too long: {} chars (max {MAX_TITLE_LEN})",
            title.len()
        )));
    }
    Ok(())
}

/// Validate a product description length.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Product description too long: {} chars (max {MAX_DESCRIPTION_LEN})",
            description.len()
        )));
    }
    Ok(())
}

/// Validate a price in smallest-currency-unit cents.
pub fn validate_price(price: i64) -> Result<(), CoreError> {
    if price < 0 {
        return Err(CoreError::Validation(format!(
            "Price must not be negative, got {price}"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Slug generation
   -------------------------------------------------------------------------- */

/// Generate a URL slug from a title.
///
/// Lowercases, keeps ASCII alphanumerics, and collapses every other run of
/// characters into a single `-`. Leading/trailing separators are trimmed.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_sep = true;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            slug.push('-');
            last_was_sep = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Blue Shirt"), "blue-shirt");
        assert_eq!(slugify("  Fancy   Hat!  "), "fancy-hat");
        assert_eq!(slugify("Déjà vu 2"), "d-j-vu-2");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Blue Shirt").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(500).is_ok());
        assert!(validate_price(-1).is_err());
    }

    #[test]
    fn test_validate_status() {
        for status in VALID_STATUSES {
            assert!(validate_status(status).is_ok());
        }
        assert!(validate_status("archived").is_err());
    }
}
