//! Order models and DTOs.

use serde::{Deserialize, Serialize};
use souk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `orders` table. `paid_amount` is in cents.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub paid_amount: i64,
    pub is_paid: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// A row from the `order_items` table.
///
/// `price` is the line total snapshot in cents (unit price at purchase time
/// times quantity), so later product price edits never rewrite history.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub product_id: DbId,
    pub price: i64,
    pub quantity: i64,
}

/// DTO for creating an order from a checked-out cart.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub paid_amount: i64,
    pub created_by: DbId,
    pub items: Vec<CreateOrderItem>,
}

/// One line of a [`CreateOrder`].
#[derive(Debug, Clone)]
pub struct CreateOrderItem {
    pub product_id: DbId,
    pub price: i64,
    pub quantity: i64,
}

/// An order together with its line items.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// A flattened vendor-side view of one sold item: the order item joined
/// with its product title and the order's creation time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VendorOrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub product_id: DbId,
    pub product_title: String,
    pub price: i64,
    pub quantity: i64,
    pub ordered_at: Timestamp,
}

/// Request body for `POST /cart/checkout`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
}
