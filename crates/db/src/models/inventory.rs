//! Inventory item model and DTOs.

use mediavault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog item from the `inventories` table.
///
/// `tags` is the projected list of associated tag ids, not a physical
/// column; every repository query selects it via an `ARRAY` subquery.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inventory {
    pub id: DbId,
    pub name: String,
    pub type_id: DbId,
    pub language_id: DbId,
    /// Free-form JSON document. Validated against the static schema at
    /// creation time only.
    pub metadata: serde_json::Value,
    /// Server-assigned, immutable.
    pub created_at: Timestamp,
    pub tags: Vec<DbId>,
}

/// DTO for creating an inventory item.
///
/// The handler validates `metadata` against
/// [`mediavault_core::metadata::InventoryMetadata`] before this reaches the
/// repository.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventory {
    pub name: String,
    pub type_id: DbId,
    pub language_id: DbId,
    pub metadata: serde_json::Value,
    #[serde(default)]
    pub tag_ids: Vec<DbId>,
}

/// DTO for partially updating an inventory item. `created_at` is immutable
/// and has no counterpart here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInventory {
    pub name: Option<String>,
    pub type_id: Option<DbId>,
    pub language_id: Option<DbId>,
    pub metadata: Option<serde_json::Value>,
    /// When present, replaces the full tag association set.
    pub tag_ids: Option<Vec<DbId>>,
}
