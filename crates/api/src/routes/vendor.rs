//! Route definitions for vendor pages.
//!
//! Two routers are provided:
//! - `public_router()` mounted at `/vendors` (no auth)
//! - `management_router()` mounted at `/vendor` (vendor role required)

use axum::routing::get;
use axum::Router;

use crate::handlers::vendor;
use crate::state::AppState;

/// Public vendor routes mounted at `/vendors`.
///
/// ```text
/// GET /{id}   -> vendor_detail
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{id}", get(vendor::vendor_detail))
}

/// Vendor management routes mounted at `/vendor`. All require the vendor role.
///
/// ```text
/// GET    /products        -> my_products
/// POST   /products        -> create_product
/// PUT    /products/{id}   -> update_product
/// DELETE /products/{id}   -> delete_product
/// GET    /orders          -> my_sold_items
/// GET    /orders/{id}     -> order_detail
/// ```
pub fn management_router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(vendor::my_products).post(vendor::create_product),
        )
        .route(
            "/products/{id}",
            axum::routing::put(vendor::update_product).delete(vendor::delete_product),
        )
        .route("/orders", get(vendor::my_sold_items))
        .route("/orders/{id}", get(vendor::order_detail))
}
