//! Order tag model and DTOs.

use mediavault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `order_tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderTag {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
}

/// DTO for creating an order tag. `is_active` defaults to true.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderTag {
    pub name: String,
    pub is_active: Option<bool>,
}
