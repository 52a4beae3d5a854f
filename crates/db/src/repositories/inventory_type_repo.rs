//! Repository for the `inventory_types` lookup table.

use mediavault_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory_type::{CreateInventoryType, InventoryType, UpdateInventoryType};

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for inventory types.
pub struct InventoryTypeRepo;

impl InventoryTypeRepo {
    /// Insert a new inventory type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInventoryType,
    ) -> Result<InventoryType, sqlx::Error> {
        let query = format!("INSERT INTO inventory_types (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, InventoryType>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an inventory type by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InventoryType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory_types WHERE id = $1");
        sqlx::query_as::<_, InventoryType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all inventory types in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<InventoryType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory_types ORDER BY id");
        sqlx::query_as::<_, InventoryType>(&query).fetch_all(pool).await
    }

    /// Update an inventory type. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventoryType,
    ) -> Result<Option<InventoryType>, sqlx::Error> {
        let query = format!(
            "UPDATE inventory_types SET name = COALESCE($2, name) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryType>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an inventory type by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventory_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether an inventory type with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM inventory_types WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
