//! Route definitions for the session cart.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::cart;
use crate::state::AppState;

/// Cart routes mounted at `/cart`. All of them take the session token from
/// the `X-Cart-Token` header and echo it back in the cart payload.
///
/// ```text
/// GET    /                                  -> get_cart
/// DELETE /                                  -> clear_cart
/// POST   /items                             -> add_item
/// POST   /items/{product_id}/quantity       -> change_quantity (?action=)
/// DELETE /items/{product_id}                -> remove_item
/// POST   /checkout                          -> checkout (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::get_cart).delete(cart::clear_cart))
        .route("/items", post(cart::add_item))
        .route("/items/{product_id}/quantity", post(cart::change_quantity))
        .route("/items/{product_id}", delete(cart::remove_item))
        .route("/checkout", post(cart::checkout))
}
