//! Well-known role name constants.
//!
//! Roles are derived from the `is_vendor` flag on the user row rather than
//! a separate roles table; the resolved name is embedded in JWT claims.

pub const ROLE_CUSTOMER: &str = "customer";
pub const ROLE_VENDOR: &str = "vendor";

/// Resolve the role name for a user.
pub fn role_for(is_vendor: bool) -> &'static str {
    if is_vendor {
        ROLE_VENDOR
    } else {
        ROLE_CUSTOMER
    }
}
