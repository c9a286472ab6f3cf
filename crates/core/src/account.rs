//! Signup field validation.

use crate::error::CoreError;

/// Maximum length for a username.
pub const MAX_USERNAME_LEN: usize = 150;

/// Maximum length for an email address.
pub const MAX_EMAIL_LEN: usize = 254;

/// Validate a username: non-empty, within length limit, and restricted to
/// ASCII alphanumerics plus `.`, `_`, `-`.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.is_empty() {
        return Err(CoreError::Validation(
            "Username must not be empty".to_string(),
        ));
    }
    if username.len() > MAX_USERNAME_LEN {
        return Err(CoreError::Validation(format!(
            "Username too long: {} chars (max {MAX_USERNAME_LEN})",
            username.len()
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(CoreError::Validation(
            "Username may only contain letters, digits, '.', '_' and '-'".to_string(),
        ));
    }
    Ok(())
}

/// Validate an email address shape: `local@domain` with a non-empty local
/// part and a dot somewhere in the domain.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.len() > MAX_EMAIL_LEN {
        return Err(CoreError::Validation(format!(
            "Email too long: {} chars (max {MAX_EMAIL_LEN})",
            email.len()
        )));
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !valid {
        return Err(CoreError::Validation(format!(
            "Invalid email address: {email}"
        )));
    }
    Ok(())
}
