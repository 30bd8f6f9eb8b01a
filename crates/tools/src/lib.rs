//! Developer Tooling: read-only inspection of a character's inventory and UI.
//!
//! # Invariants
//! - Inspectors never mutate the state they read.

mod inspector;

pub use inspector::{EntryInfo, InventoryInspector, InventorySummary};
