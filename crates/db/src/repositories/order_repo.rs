//! Repository for the `orders` and `order_items` tables.

use std::collections::HashMap;

use souk_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{CreateOrder, Order, OrderItem, OrderWithItems, VendorOrderItem};

const ORDER_COLUMNS: &str =
    "id, first_name, last_name, address, city, paid_amount, is_paid, created_by, created_at";

const ITEM_COLUMNS: &str = "id, order_id, product_id, price, quantity";

/// Provides CRUD operations for orders and their line items.
pub struct OrderRepo;

impl OrderRepo {
    /// Create an order and all of its line items in a single transaction.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<OrderWithItems, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let order_query = format!(
            "INSERT INTO orders (first_name, last_name, address, city, paid_amount, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ORDER_COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&order_query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(input.paid_amount)
            .bind(input.created_by)
            .fetch_one(&mut *tx)
            .await?;

        let item_query = format!(
            "INSERT INTO order_items (order_id, product_id, price, quantity)
             VALUES ($1, $2, $3, $4)
             RETURNING {ITEM_COLUMNS}"
        );
        let mut items = Vec::with_capacity(input.items.len());
        for item in &input.items {
            let row = sqlx::query_as::<_, OrderItem>(&item_query)
                .bind(order.id)
                .bind(item.product_id)
                .bind(item.price)
                .bind(item.quantity)
                .fetch_one(&mut *tx)
                .await?;
            items.push(row);
        }

        tx.commit().await?;

        Ok(OrderWithItems { order, items })
    }

    /// A buyer's orders with their items, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<OrderWithItems>, sqlx::Error> {
        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders
             WHERE created_by = $1
             ORDER BY created_at DESC"
        );
        let orders = sqlx::query_as::<_, Order>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Self::attach_items(pool, orders).await
    }

    /// Fetch one order with its items, but only if at least one of its
    /// items is a product owned by `vendor_id`. Vendors can only see
    /// orders they participate in.
    pub async fn find_for_vendor(
        pool: &PgPool,
        order_id: DbId,
        vendor_id: DbId,
    ) -> Result<Option<OrderWithItems>, sqlx::Error> {
        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders
             WHERE id = $1
               AND EXISTS (
                   SELECT 1 FROM order_items oi
                   JOIN products p ON p.id = oi.product_id
                   WHERE oi.order_id = orders.id AND p.user_id = $2
               )"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(order_id)
            .bind(vendor_id)
            .fetch_optional(pool)
            .await?;

        let Some(order) = order else {
            return Ok(None);
        };

        let mut with_items = Self::attach_items(pool, vec![order]).await?;
        Ok(with_items.pop())
    }

    /// All sold items for a vendor's products, newest order first.
    pub async fn list_items_for_vendor(
        pool: &PgPool,
        vendor_id: DbId,
    ) -> Result<Vec<VendorOrderItem>, sqlx::Error> {
        sqlx::query_as::<_, VendorOrderItem>(
            "SELECT oi.id, oi.order_id, oi.product_id, p.title AS product_title,
                    oi.price, oi.quantity, o.created_at AS ordered_at
             FROM order_items oi
             JOIN products p ON p.id = oi.product_id
             JOIN orders o ON o.id = oi.order_id
             WHERE p.user_id = $1
             ORDER BY o.created_at DESC, oi.id ASC",
        )
        .bind(vendor_id)
        .fetch_all(pool)
        .await
    }

    /// Fetch items for the given orders in one round trip and zip them
    /// back onto their parents, preserving order ordering.
    async fn attach_items(
        pool: &PgPool,
        orders: Vec<Order>,
    ) -> Result<Vec<OrderWithItems>, sqlx::Error> {
        let ids: Vec<DbId> = orders.iter().map(|o| o.id).collect();
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM order_items WHERE order_id = ANY($1) ORDER BY id ASC"
        );
        let rows = sqlx::query_as::<_, OrderItem>(&query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut by_order: HashMap<DbId, Vec<OrderItem>> = HashMap::new();
        for item in rows {
            by_order.entry(item.order_id).or_default().push(item);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = by_order.remove(&order.id).unwrap_or_default();
                OrderWithItems { order, items }
            })
            .collect())
    }
}
