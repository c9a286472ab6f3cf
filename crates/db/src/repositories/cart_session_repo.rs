//! Repository for the `cart_sessions` table.
//!
//! The session store behind `souk_core::cart::Cart`: an opaque JSONB value
//! per visitor token. This layer never interprets the cart payload; the
//! core crate owns its shape and validation.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cart_session::CartSession;

const COLUMNS: &str = "token, cart, created_at, updated_at";

/// Provides load/save/delete operations for visitor cart sessions.
pub struct CartSessionRepo;

impl CartSessionRepo {
    /// Load the session for `token`, or create an empty one.
    ///
    /// An unknown or absent token yields a fresh session row under a new
    /// token: the empty cart is written back immediately so the session
    /// exists from first touch.
    pub async fn load_or_create(
        pool: &PgPool,
        token: Option<Uuid>,
    ) -> Result<CartSession, sqlx::Error> {
        if let Some(token) = token {
            if let Some(session) = Self::find(pool, token).await? {
                return Ok(session);
            }
        }

        let query = format!(
            "INSERT INTO cart_sessions (cart)
             VALUES ('{{}}'::jsonb)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartSession>(&query).fetch_one(pool).await
    }

    /// Find an existing session by token.
    pub async fn find(pool: &PgPool, token: Uuid) -> Result<Option<CartSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cart_sessions WHERE token = $1");
        sqlx::query_as::<_, CartSession>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Write a session's cart payload through to storage.
    ///
    /// Every cart mutation calls this synchronously; `updated_at` is the
    /// modified signal. Returns `true` if the session row still existed.
    pub async fn save(
        pool: &PgPool,
        token: Uuid,
        cart: &serde_json::Value,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE cart_sessions SET cart = $2, updated_at = NOW() WHERE token = $1")
                .bind(token)
                .bind(cart)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a session outright (cart cleared). No-op if already gone.
    pub async fn delete(pool: &PgPool, token: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_sessions WHERE token = $1")
            .bind(token)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
