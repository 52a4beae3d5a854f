//! Inventory tag model and DTOs.

use mediavault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `inventory_tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryTag {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
}

/// DTO for creating an inventory tag. `is_active` defaults to true.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryTag {
    pub name: String,
    pub is_active: Option<bool>,
}

/// DTO for updating an inventory tag.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInventoryTag {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}
