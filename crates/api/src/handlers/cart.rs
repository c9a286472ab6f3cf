//! Handlers for the session cart: view, add, quantity stepper, remove,
//! clear, and checkout.
//!
//! Every handler reconstructs the [`Cart`] value from the session store,
//! applies one mutation, and writes it straight back -- carts live in the
//! per-visitor session, never in process memory. Concurrent requests for
//! the same session race on the final write; the last one wins, which is
//! the session store's own semantics.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use souk_core::cart::{Cart, PricedLine, ProductInfo};
use souk_core::error::CoreError;
use souk_core::order as checkout_rules;
use souk_core::types::DbId;
use souk_db::models::order::{CheckoutRequest, CreateOrder, CreateOrderItem};
use souk_db::repositories::{CartSessionRepo, OrderRepo, ProductRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::cart::CartToken;
use crate::query::ActionParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /cart/items`.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: DbId,
    /// Defaults to 1 when omitted.
    pub quantity: Option<i64>,
}

/// The full cart as returned by every cart endpoint.
///
/// Always carries the session token so a first-touch client learns the id
/// it must echo back in `X-Cart-Token`.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub token: Uuid,
    pub lines: Vec<PricedLine>,
    pub item_count: i64,
    pub total_cost: Decimal,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/cart
///
/// The current cart with priced lines and totals. Touching a session for
/// the first time creates it.
pub async fn get_cart(
    State(state): State<AppState>,
    CartToken(token): CartToken,
) -> AppResult<impl IntoResponse> {
    let (token, cart) = load_cart(&state, token).await?;
    let view = build_view(&state, token, &cart).await?;

    Ok(Json(DataResponse { data: view }))
}

/// POST /api/v1/cart/items
///
/// Add a product to the cart. If the product is already present the call is
/// a no-op (the stepper endpoint changes quantities). Product existence is
/// not checked here; a dangling reference surfaces when the cart is priced.
pub async fn add_item(
    State(state): State<AppState>,
    CartToken(token): CartToken,
    Json(input): Json<AddItemRequest>,
) -> AppResult<impl IntoResponse> {
    let quantity = input.quantity.unwrap_or(1);
    if quantity < 1 {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Quantity must be at least 1, got {quantity}"
        ))));
    }

    let (token, mut cart) = load_cart(&state, token).await?;
    cart.add(input.product_id, quantity, false);
    save_cart(&state, token, &cart).await?;

    tracing::info!(product_id = input.product_id, quantity, "Product added to cart");

    let view = build_view(&state, token, &cart).await?;
    Ok(Json(DataResponse { data: view }))
}

/// POST /api/v1/cart/items/{product_id}/quantity?action=increase|decrease
///
/// Step a line's quantity up or down by one. Stepping down to exactly 0
/// removes the line entirely.
pub async fn change_quantity(
    State(state): State<AppState>,
    CartToken(token): CartToken,
    Path(product_id): Path<DbId>,
    Query(params): Query<ActionParams>,
) -> AppResult<impl IntoResponse> {
    let delta = match params.action.as_deref() {
        Some("increase") => 1,
        Some("decrease") => -1,
        _ => {
            return Err(AppError::BadRequest(
                "action must be 'increase' or 'decrease'".into(),
            ))
        }
    };

    let (token, mut cart) = load_cart(&state, token).await?;
    cart.add(product_id, delta, true);
    save_cart(&state, token, &cart).await?;

    tracing::info!(product_id, delta, "Cart quantity changed");

    let view = build_view(&state, token, &cart).await?;
    Ok(Json(DataResponse { data: view }))
}

/// DELETE /api/v1/cart/items/{product_id}
///
/// Remove a product's line. Removing an absent product is a silent no-op
/// and skips the session write.
pub async fn remove_item(
    State(state): State<AppState>,
    CartToken(token): CartToken,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let (token, mut cart) = load_cart(&state, token).await?;

    if cart.remove(&product_id.to_string()) {
        save_cart(&state, token, &cart).await?;
        tracing::info!(product_id, "Product removed from cart");
    }

    let view = build_view(&state, token, &cart).await?;
    Ok(Json(DataResponse { data: view }))
}

/// DELETE /api/v1/cart
///
/// Delete the whole cart session. Clearing an absent or already-empty cart
/// is a silent no-op. Returns 204 No Content.
pub async fn clear_cart(
    State(state): State<AppState>,
    CartToken(token): CartToken,
) -> AppResult<StatusCode> {
    if let Some(token) = token {
        CartSessionRepo::delete(&state.pool, token).await?;
        tracing::info!(%token, "Cart cleared");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/cart/checkout
///
/// Turn the cart into an order. Enumerates the cart strictly (a dangling
/// product reference fails the whole checkout), snapshots per-line totals
/// in cents, creates the order and its items in one transaction, and
/// deletes the cart session.
pub async fn checkout(
    auth: AuthUser,
    State(state): State<AppState>,
    CartToken(token): CartToken,
    Json(input): Json<CheckoutRequest>,
) -> AppResult<impl IntoResponse> {
    checkout_rules::validate_checkout(
        &input.first_name,
        &input.last_name,
        &input.address,
        &input.city,
    )?;

    let (token, cart) = load_cart(&state, token).await?;
    if cart.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Cart is empty".into(),
        )));
    }

    let products = product_map(&state, &cart).await?;
    let paid_amount = cart.total_cents(&products)?;

    let mut items = Vec::new();
    for line in cart.lines() {
        // Every line resolved above, so the lookups here cannot miss.
        let product = products.get(&line.product_id).ok_or_else(|| {
            AppError::InternalError(format!("Product {} vanished mid-checkout", line.product_id))
        })?;
        let product_id: DbId = line.product_id.parse().map_err(|_| {
            AppError::InternalError(format!("Non-numeric product id {}", line.product_id))
        })?;
        items.push(CreateOrderItem {
            product_id,
            price: product.price * line.quantity,
            quantity: line.quantity,
        });
    }

    let order = OrderRepo::create(
        &state.pool,
        &CreateOrder {
            first_name: input.first_name,
            last_name: input.last_name,
            address: input.address,
            city: input.city,
            paid_amount,
            created_by: auth.user_id,
            items,
        },
    )
    .await?;

    CartSessionRepo::delete(&state.pool, token).await?;

    tracing::info!(
        order_id = order.order.id,
        user_id = auth.user_id,
        paid_amount,
        item_count = order.items.len(),
        "Order placed",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load (or create) the session for `token` and decode its cart.
async fn load_cart(state: &AppState, token: Option<Uuid>) -> AppResult<(Uuid, Cart)> {
    let session = CartSessionRepo::load_or_create(&state.pool, token).await?;
    let cart = Cart::from_json(&session.cart)?;
    Ok((session.token, cart))
}

/// Write the cart through to its session row.
async fn save_cart(state: &AppState, token: Uuid, cart: &Cart) -> AppResult<()> {
    CartSessionRepo::save(&state.pool, token, &cart.to_json()).await?;
    Ok(())
}

/// Fetch every product the cart references, keyed by string id.
///
/// Ids that do not parse or no longer resolve are simply absent from the
/// map; pricing then fails with the cart's own NotFound error.
async fn product_map(
    state: &AppState,
    cart: &Cart,
) -> AppResult<HashMap<String, ProductInfo>> {
    let ids: Vec<DbId> = cart
        .product_ids()
        .filter_map(|id| id.parse().ok())
        .collect();

    let products = ProductRepo::find_by_ids(&state.pool, &ids).await?;

    Ok(products
        .into_iter()
        .map(|p| {
            (
                p.id.to_string(),
                ProductInfo {
                    id: p.id.to_string(),
                    title: p.title,
                    slug: p.slug,
                    price: p.price,
                },
            )
        })
        .collect())
}

/// Join, price, and package the cart for a response.
async fn build_view(state: &AppState, token: Uuid, cart: &Cart) -> AppResult<CartView> {
    let products = product_map(state, cart).await?;
    let lines = cart.priced_lines(&products)?;
    let total_cost = cart.total_cost(&products)?;

    Ok(CartView {
        token,
        lines,
        item_count: cart.count(),
        total_cost,
    })
}
