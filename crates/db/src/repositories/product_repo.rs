//! Repository for the `products` table.

use souk_core::catalog::{STATUS_ACTIVE, STATUS_DELETED};
use souk_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, category_id, title, slug, description, price, \
                        image_url, status, created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        slug: &str,
        input: &CreateProduct,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (user_id, category_id, title, slug, description, price, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(user_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a product by internal ID, regardless of status.
    ///
    /// Cart and order lookups resolve by id: a soft-deleted product still
    /// resolves so existing carts and order history keep working.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find several products by ID in one round trip, regardless of status.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = ANY($1)");
        sqlx::query_as::<_, Product>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Find an active product by its URL slug.
    pub async fn find_active_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE slug = $1 AND status = $2");
        sqlx::query_as::<_, Product>(&query)
            .bind(slug)
            .bind(STATUS_ACTIVE)
            .fetch_optional(pool)
            .await
    }

    /// Front-page listing: active products, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products WHERE status = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(STATUS_ACTIVE)
            .fetch_all(pool)
            .await
    }

    /// Active products in a category, newest first.
    pub async fn list_active_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE category_id = $1 AND status = $2
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(category_id)
            .bind(STATUS_ACTIVE)
            .fetch_all(pool)
            .await
    }

    /// Active products owned by a vendor, newest first (public vendor page).
    pub async fn list_active_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE user_id = $1 AND status = $2
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(user_id)
            .bind(STATUS_ACTIVE)
            .fetch_all(pool)
            .await
    }

    /// A vendor's own products, excluding soft-deleted ones, newest first.
    pub async fn list_for_vendor(pool: &PgPool, user_id: DbId) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE user_id = $1 AND status <> $2
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(user_id)
            .bind(STATUS_DELETED)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over title and description of
    /// active products, newest first.
    pub async fn search_active(pool: &PgPool, term: &str) -> Result<Vec<Product>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(term));
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE status = $1 AND (title ILIKE $2 OR description ILIKE $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(STATUS_ACTIVE)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Update a product owned by `user_id`. Only non-`None` fields are
    /// applied. Returns `None` if the product does not exist or belongs to
    /// another vendor.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                category_id = COALESCE($3, category_id),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                price = COALESCE($6, price),
                image_url = COALESCE($7, image_url),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a product owned by `user_id` by setting its status to
    /// `deleted`. Returns `true` if the row was updated.
    pub async fn soft_delete_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products SET status = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2 AND status <> $3",
        )
        .bind(id)
        .bind(user_id)
        .bind(STATUS_DELETED)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape LIKE metacharacters in a user-supplied search term.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
