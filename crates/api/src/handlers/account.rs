//! Handlers for the authenticated user's own account.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use souk_core::error::CoreError;
use souk_db::repositories::{OrderRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::auth::create_auth_response;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/account/orders
///
/// The caller's order history with line items, newest first.
pub async fn my_orders(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let orders = OrderRepo::list_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse { data: orders }))
}

/// POST /api/v1/account/become-vendor
///
/// Mark the caller as a vendor. Returns a fresh token pair so the new role
/// is present in claims immediately; the old access token keeps its
/// customer role until it expires.
pub async fn become_vendor(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::set_vendor(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    tracing::info!(user_id = user.id, "User became a vendor");

    let response = create_auth_response(&state, &user).await?;
    Ok(Json(response))
}
