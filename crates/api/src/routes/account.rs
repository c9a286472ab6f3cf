//! Route definitions for the authenticated user's own account.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Account routes mounted at `/account`. All require authentication.
///
/// ```text
/// GET  /orders          -> my_orders
/// POST /become-vendor   -> become_vendor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(account::my_orders))
        .route("/become-vendor", post(account::become_vendor))
}
