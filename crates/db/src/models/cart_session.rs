//! Cart session model.

use serde::Serialize;
use souk_core::types::Timestamp;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `cart_sessions` table.
///
/// `cart` is the opaque serialized mapping owned by `souk_core::cart::Cart`;
/// this layer stores and returns it without interpreting its contents.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CartSession {
    pub token: Uuid,
    pub cart: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
