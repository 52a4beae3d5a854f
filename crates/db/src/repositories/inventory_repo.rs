//! Repository for the `inventories` table and its tag links.

use mediavault_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::inventory::{CreateInventory, Inventory, UpdateInventory};

/// Column list shared across queries. The `tags` column is an `ARRAY`
/// projection of the junction table so every query returns the full
/// serialized shape in one round trip.
const COLUMNS: &str = "id, name, type_id, language_id, metadata, created_at, \
    ARRAY(SELECT tag_id FROM inventory_tag_links l \
     WHERE l.inventory_id = inventories.id ORDER BY l.tag_id) AS tags";

/// Provides CRUD operations for inventory items.
pub struct InventoryRepo;

impl InventoryRepo {
    /// Insert a new inventory item and its tag links in one transaction,
    /// returning the created row.
    ///
    /// `created_at` is assigned by the database and never written here.
    pub async fn create(pool: &PgPool, input: &CreateInventory) -> Result<Inventory, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO inventories (name, type_id, language_id, metadata) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.type_id)
        .bind(input.language_id)
        .bind(&input.metadata)
        .fetch_one(&mut *tx)
        .await?;

        for &tag_id in &input.tag_ids {
            sqlx::query("INSERT INTO inventory_tag_links (inventory_id, tag_id) VALUES ($1, $2)")
                .bind(id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!("SELECT {COLUMNS} FROM inventories WHERE id = $1");
        let inventory = sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(inventory)
    }

    /// Find an inventory item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inventory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inventories WHERE id = $1");
        sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List inventory items in insertion order with limit/offset paging,
    /// optionally restricted to rows created strictly after `created_after`.
    pub async fn list(
        pool: &PgPool,
        created_after: Option<Timestamp>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Inventory>, sqlx::Error> {
        match created_after {
            Some(after) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM inventories \
                     WHERE created_at > $1 \
                     ORDER BY id \
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, Inventory>(&query)
                    .bind(after)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM inventories \
                     ORDER BY id \
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, Inventory>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Count inventory items matching the same filter as [`Self::list`].
    pub async fn count(
        pool: &PgPool,
        created_after: Option<Timestamp>,
    ) -> Result<i64, sqlx::Error> {
        match created_after {
            Some(after) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM inventories WHERE created_at > $1")
                    .bind(after)
                    .fetch_one(pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM inventories")
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Partially update an inventory item. Only non-`None` fields in `input`
    /// are applied; a present `tag_ids` replaces the association set.
    ///
    /// Returns `None` if no row with the given ID exists. `created_at` is
    /// immutable and never touched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInventory,
    ) -> Result<Option<Inventory>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE inventories SET \
                 name = COALESCE($2, name), \
                 type_id = COALESCE($3, type_id), \
                 language_id = COALESCE($4, language_id), \
                 metadata = COALESCE($5, metadata) \
             WHERE id = $1 \
             RETURNING id",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.type_id)
        .bind(input.language_id)
        .bind(&input.metadata)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(tag_ids) = &input.tag_ids {
            sqlx::query("DELETE FROM inventory_tag_links WHERE inventory_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for &tag_id in tag_ids {
                sqlx::query(
                    "INSERT INTO inventory_tag_links (inventory_id, tag_id) VALUES ($1, $2)",
                )
                .bind(id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        let query = format!("SELECT {COLUMNS} FROM inventories WHERE id = $1");
        let inventory = sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(inventory))
    }

    /// Delete an inventory item by ID. Link rows and dependent orders go
    /// with it via `ON DELETE CASCADE`. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inventories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether an inventory item with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM inventories WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
