//! User models and DTOs.

use serde::Serialize;
use souk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `users` table.
///
/// Credential and lockout fields are never serialized into responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_vendor: bool,
    pub is_active: bool,
    #[serde(skip_serializing)]
    pub failed_login_count: i32,
    #[serde(skip_serializing)]
    pub locked_until: Option<Timestamp>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The password is already hashed by the
/// caller; plaintext never reaches this layer.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Public vendor profile: the subset of a user row exposed on vendor pages.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VendorProfile {
    pub id: DbId,
    pub username: String,
    pub created_at: Timestamp,
}
