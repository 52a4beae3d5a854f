//! Shared domain primitives for the mediavault workspace.
//!
//! Holds the types every other crate agrees on: database key and timestamp
//! aliases, the domain error enum, and the static inventory metadata schema.

pub mod error;
pub mod metadata;
pub mod types;
