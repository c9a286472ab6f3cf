//! Checkout field validation.

use crate::error::CoreError;

/// Maximum length for any checkout address field.
pub const MAX_FIELD_LEN: usize = 255;

/// Validate a single required checkout field (name, address, city).
pub fn validate_field(name: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{name} must not be empty")));
    }
    if value.len() > MAX_FIELD_LEN {
        return Err(CoreError::Validation(format!(
            "{name} too long: {} chars (max {MAX_FIELD_LEN})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate the full set of checkout fields.
pub fn validate_checkout(
    first_name: &str,
    last_name: &str,
    address: &str,
    city: &str,
) -> Result<(), CoreError> {
    validate_field("first_name", first_name)?;
    validate_field("last_name", last_name)?;
    validate_field("address", address)?;
    validate_field("city", city)?;
    Ok(())
}
