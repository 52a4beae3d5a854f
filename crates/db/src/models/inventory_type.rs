//! Inventory type lookup model and DTOs.

use mediavault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `inventory_types` lookup table (e.g. `"Movie"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryType {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating an inventory type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryType {
    pub name: String,
}

/// DTO for updating an inventory type.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInventoryType {
    pub name: Option<String>,
}
