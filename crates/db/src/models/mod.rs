//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod inventory;
pub mod inventory_language;
pub mod inventory_tag;
pub mod inventory_type;
pub mod order;
pub mod order_tag;
pub mod user;
