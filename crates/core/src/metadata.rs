//! Static schema for the free-form inventory metadata document.
//!
//! The schema is fixed: all four fields are required, no extra fields are
//! accepted, and each field has exactly one JSON type. Validation happens
//! once, at inventory creation; stored documents are not re-checked on
//! partial updates.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Descriptive metadata attached to an inventory item.
///
/// `deny_unknown_fields` makes extra keys a hard error, and the absence of
/// `Option` fields makes every key required. Deserialization itself is the
/// validation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryMetadata {
    pub year: i32,
    pub actors: Vec<String>,
    pub imdb_rating: f64,
    pub rotten_tomatoes_rating: i32,
}

impl InventoryMetadata {
    /// Validate an arbitrary JSON document against the schema.
    ///
    /// Returns the typed metadata on success, or a [`CoreError::Validation`]
    /// carrying the serde error message (missing field, unknown field, or
    /// type mismatch) on failure.
    pub fn parse(value: &serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(value.clone()).map_err(|e| CoreError::Validation(e.to_string()))
    }
}
