//! Product models and DTOs.

use serde::{Deserialize, Serialize};
use souk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `products` table.
///
/// `price` is in the smallest currency unit; display conversion happens in
/// the API layer via `souk_core::money`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub user_id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a vendor creating a new product. The slug and owner are filled
/// in by the handler, not the client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub category_id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    pub image_url: Option<String>,
}

/// DTO for a vendor updating an existing product. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub category_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image_url: Option<String>,
}
