//! Repository for the `order_tags` table.

use mediavault_core::types::DbId;
use sqlx::PgPool;

use crate::models::order_tag::{CreateOrderTag, OrderTag};

const COLUMNS: &str = "id, name, is_active";

/// Provides list/create operations for order tags.
pub struct OrderTagRepo;

impl OrderTagRepo {
    /// Insert a new order tag, returning the created row.
    /// `is_active` defaults to true when absent.
    pub async fn create(pool: &PgPool, input: &CreateOrderTag) -> Result<OrderTag, sqlx::Error> {
        let query = format!(
            "INSERT INTO order_tags (name, is_active) \
             VALUES ($1, COALESCE($2, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderTag>(&query)
            .bind(&input.name)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find an order tag by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OrderTag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM order_tags WHERE id = $1");
        sqlx::query_as::<_, OrderTag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all order tags in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<OrderTag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM order_tags ORDER BY id");
        sqlx::query_as::<_, OrderTag>(&query).fetch_all(pool).await
    }

    /// Whether an order tag with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM order_tags WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
