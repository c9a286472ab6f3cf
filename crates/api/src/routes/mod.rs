pub mod account;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod health;
pub mod vendor;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                         signup (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /products                            front-page listing
/// /products/search                     search active products
/// /products/{id}/reviews               create/update review (requires auth)
///
/// /categories                          menu listing
/// /categories/{slug}                   category detail + products
/// /categories/{category_slug}/{slug}   product detail + reviews
///
/// /cart                                view (GET), clear (DELETE)
/// /cart/items                          add product (POST)
/// /cart/items/{product_id}/quantity    quantity stepper (POST, ?action=)
/// /cart/items/{product_id}             remove line (DELETE)
/// /cart/checkout                       place order (POST, requires auth)
///
/// /account/orders                      buyer order history (requires auth)
/// /account/become-vendor               flip vendor flag (requires auth)
///
/// /vendors/{id}                        public vendor page
/// /vendor/products                     own products: list, create (vendor)
/// /vendor/products/{id}                own product: update, delete (vendor)
/// /vendor/orders                       sold items (vendor)
/// /vendor/orders/{id}                  order detail (vendor, if involved)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/products", catalog::products_router())
        .nest("/categories", catalog::categories_router())
        .nest("/cart", cart::router())
        .nest("/account", account::router())
        .nest("/vendors", vendor::public_router())
        .nest("/vendor", vendor::management_router())
}
