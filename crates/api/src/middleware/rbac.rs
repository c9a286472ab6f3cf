//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use souk_core::error::CoreError;
use souk_core::roles::ROLE_VENDOR;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `vendor` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn vendor_only(RequireVendor(user): RequireVendor) -> AppResult<Json<()>> {
///     // user is guaranteed to be a vendor here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireVendor(pub AuthUser);

impl FromRequestParts<AppState> for RequireVendor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_VENDOR {
            return Err(AppError::Core(CoreError::Forbidden(
                "Vendor role required".into(),
            )));
        }
        Ok(RequireVendor(user))
    }
}
