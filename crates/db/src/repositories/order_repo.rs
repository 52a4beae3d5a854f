//! Repository for the `orders` table and its tag links.

use chrono::NaiveDate;
use mediavault_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{CreateOrder, Order};
use crate::models::order_tag::OrderTag;

/// Column list shared across queries. The `tags` column is an `ARRAY`
/// projection of the junction table.
const COLUMNS: &str = "id, is_active, inventory_id, start_date, embargo_date, \
    ARRAY(SELECT tag_id FROM order_tag_links l \
     WHERE l.order_id = orders.id ORDER BY l.tag_id) AS tags";

const TAG_COLUMNS: &str = "t.id, t.name, t.is_active";

/// Provides CRUD operations for distribution orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order and its tag links in one transaction, returning
    /// the created row. `is_active` defaults to true when absent.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<Order, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO orders (inventory_id, start_date, embargo_date, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, true)) \
             RETURNING id",
        )
        .bind(input.inventory_id)
        .bind(input.start_date)
        .bind(input.embargo_date)
        .bind(input.is_active)
        .fetch_one(&mut *tx)
        .await?;

        for &tag_id in &input.tag_ids {
            sqlx::query("INSERT INTO order_tag_links (order_id, tag_id) VALUES ($1, $2)")
                .bind(id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(order)
    }

    /// Find an order by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List orders in insertion order, optionally restricted to those whose
    /// window is fully contained in `[start, end]`
    /// (`start_date >= start AND embargo_date <= end`).
    pub async fn list(
        pool: &PgPool,
        window: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<Order>, sqlx::Error> {
        match window {
            Some((start, end)) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM orders \
                     WHERE start_date >= $1 AND embargo_date <= $2 \
                     ORDER BY id"
                );
                sqlx::query_as::<_, Order>(&query)
                    .bind(start)
                    .bind(end)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM orders ORDER BY id");
                sqlx::query_as::<_, Order>(&query).fetch_all(pool).await
            }
        }
    }

    /// Set an order inactive. Unconditional and idempotent: an already
    /// inactive order still counts as updated.
    ///
    /// Returns `false` only if no row with the given ID exists.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE orders SET is_active = false WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the tags associated with one order.
    pub async fn tags(pool: &PgPool, order_id: DbId) -> Result<Vec<OrderTag>, sqlx::Error> {
        let query = format!(
            "SELECT {TAG_COLUMNS} FROM order_tag_links l \
             JOIN order_tags t ON t.id = l.tag_id \
             WHERE l.order_id = $1 \
             ORDER BY t.id"
        );
        sqlx::query_as::<_, OrderTag>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// List all orders carrying a given tag.
    pub async fn list_by_tag(pool: &PgPool, tag_id: DbId) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders \
             WHERE id IN (SELECT order_id FROM order_tag_links WHERE tag_id = $1) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(tag_id)
            .fetch_all(pool)
            .await
    }

    /// Whether an order with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM orders WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
