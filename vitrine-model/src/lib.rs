//! Core data model definitions shared across Vitrine crates.
#![allow(missing_docs)]

pub mod contact;
pub mod error;
pub mod ids;
pub mod item;

// Intentionally curated re-exports for downstream consumers.
pub use contact::{ContactSubmission, RelayResponse};
pub use error::{ModelError, Result as ModelResult};
pub use ids::ItemId;
pub use item::RailItem;
