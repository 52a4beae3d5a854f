//! Inventory language lookup model and DTOs.

use mediavault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `inventory_languages` lookup table (e.g. `"English"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InventoryLanguage {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating an inventory language.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryLanguage {
    pub name: String,
}

/// DTO for updating an inventory language.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInventoryLanguage {
    pub name: Option<String>,
}
