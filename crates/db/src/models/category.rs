//! Category models and DTOs.

use serde::{Deserialize, Serialize};
use souk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub title: String,
    pub slug: String,
}
