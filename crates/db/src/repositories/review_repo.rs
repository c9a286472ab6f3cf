//! Repository for the `reviews` table.

use souk_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review};

/// Joined column list: reviews plus the reviewer's username.
const COLUMNS: &str = "r.id, r.product_id, r.user_id, u.username, r.rating, r.content, \
                        r.created_at, r.updated_at";

/// Provides operations for product reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Create the caller's review for a product, or update it if one
    /// already exists (one review per user per product).
    pub async fn upsert(
        pool: &PgPool,
        product_id: DbId,
        user_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "WITH upserted AS (
                 INSERT INTO reviews (product_id, user_id, rating, content)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT ON CONSTRAINT uq_reviews_product_user
                 DO UPDATE SET rating = EXCLUDED.rating,
                               content = EXCLUDED.content,
                               updated_at = NOW()
                 RETURNING *
             )
             SELECT {COLUMNS} FROM upserted r
             JOIN users u ON u.id = r.user_id"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(product_id)
            .bind(user_id)
            .bind(input.rating)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// All reviews for a product, newest first.
    pub async fn list_for_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.product_id = $1
             ORDER BY r.created_at DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// Average rating for a product, or 0 when it has no reviews.
    pub async fn average_rating(pool: &PgPool, product_id: DbId) -> Result<f64, sqlx::Error> {
        let (avg,): (f64,) = sqlx::query_as(
            "SELECT COALESCE(AVG(rating)::float8, 0) FROM reviews WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_one(pool)
        .await?;
        Ok(avg)
    }
}
