//! Repository for the `inventory_languages` lookup table.

use mediavault_core::types::DbId;
use sqlx::PgPool;

use crate::models::inventory_language::{
    CreateInventoryLanguage, InventoryLanguage, UpdateInventoryLanguage,
};

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for inventory languages.
pub struct InventoryLanguageRepo;

impl InventoryLanguageRepo {
    /// Insert a new inventory language, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInventoryLanguage,
    ) -> Result<InventoryLanguage, sqlx::Error> {
        let query =
            format!("INSERT INTO inventory_languages (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, InventoryLanguage>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an inventory language by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InventoryLanguage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory_languages WHERE id = $1");
        sqlx::query_as::<_, InventoryLanguage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all inventory languages in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<InventoryLanguage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventory_languages ORDER BY id");
        sqlx::query_as::<_, InventoryLanguage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an inventory language. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventoryLanguage,
    ) -> Result<Option<InventoryLanguage>, sqlx::Error> {
        let query = format!(
            "UPDATE inventory_languages SET name = COALESCE($2, name) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InventoryLanguage>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an inventory language by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventory_languages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether an inventory language with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM inventory_languages WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
