//! Distribution order model and DTOs.

use chrono::NaiveDate;
use mediavault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `orders` table: a window during which one inventory item
/// may be distributed.
///
/// `start_date` and `embargo_date` bound the window; no ordering between
/// them is enforced. `tags` is the projected list of associated tag ids,
/// selected via an `ARRAY` subquery.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub is_active: bool,
    pub inventory_id: DbId,
    pub start_date: NaiveDate,
    pub embargo_date: NaiveDate,
    pub tags: Vec<DbId>,
}

/// DTO for creating an order. `is_active` defaults to true.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub inventory_id: DbId,
    pub start_date: NaiveDate,
    pub embargo_date: NaiveDate,
    pub is_active: Option<bool>,
    #[serde(default)]
    pub tag_ids: Vec<DbId>,
}
