//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for search endpoints (`?query=`).
///
/// A missing parameter is treated as the empty string, which matches
/// everything.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// Query parameters for endpoints driven by an `?action=` verb, such as
/// the cart quantity stepper (`increase` / `decrease`).
#[derive(Debug, Deserialize)]
pub struct ActionParams {
    pub action: Option<String>,
}
