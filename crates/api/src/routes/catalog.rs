//! Route definitions for the public catalog.
//!
//! Two routers are provided:
//! - `products_router()` mounted at `/products`
//! - `categories_router()` mounted at `/categories`

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Product routes mounted at `/products`.
///
/// ```text
/// GET  /                 -> list_products (front page)
/// GET  /search           -> search_products
/// POST /{id}/reviews     -> create_review (requires auth)
/// ```
pub fn products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_products))
        .route("/search", get(catalog::search_products))
        .route("/{id}/reviews", post(catalog::create_review))
}

/// Category routes mounted at `/categories`.
///
/// ```text
/// GET /                           -> list_categories (menu)
/// GET /{slug}                     -> category_detail
/// GET /{category_slug}/{slug}     -> product_detail
/// ```
pub fn categories_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_categories))
        .route("/{slug}", get(catalog::category_detail))
        .route("/{category_slug}/{slug}", get(catalog::product_detail))
}
