//! Review models and DTOs.

use serde::{Deserialize, Serialize};
use souk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A review joined with the reviewer's username for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub product_id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub rating: i16,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or updating the caller's review of a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub rating: i16,
    pub content: String,
}
