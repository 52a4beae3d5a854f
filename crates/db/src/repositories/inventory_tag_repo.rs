//! Repository for the `inventory_tags` table.

use mediavault_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory_tag::{CreateInventoryTag, InventoryTag, UpdateInventoryTag};

const COLUMNS: &str = "id, name, is_active";

/// Provides CRUD operations for inventory tags.
pub struct InventoryTagRepo;

impl InventoryTagRepo {
    /// Insert a new inventory tag, returning the created row.
    /// `is_active` defaults to true when absent.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInventoryTag,
    ) -> Result<InventoryTag, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory_tags (name, is_active) \
             VALUES ($1, COALESCE($2, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryTag>(&query)
            .bind(&input.name)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find an inventory tag by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InventoryTag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory_tags WHERE id = $1");
        sqlx::query_as::<_, InventoryTag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all inventory tags in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<InventoryTag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory_tags ORDER BY id");
        sqlx::query_as::<_, InventoryTag>(&query).fetch_all(pool).await
    }

    /// Update an inventory tag. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventoryTag,
    ) -> Result<Option<InventoryTag>, sqlx::Error> {
        let query = format!(
            "UPDATE inventory_tags SET \
                 name = COALESCE($2, name), \
                 is_active = COALESCE($3, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryTag>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete an inventory tag by ID. Cascade deletes its link rows.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventory_tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether an inventory tag with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM inventory_tags WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
