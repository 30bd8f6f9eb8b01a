//! Inventory Ledger: counts of collected item kinds, in pickup order.
//!
//! # Invariants
//! - At most one entry per `ItemKind`.
//! - Every stored entry has `count >= 1`; reaching zero removes the entry.
//! - Insertion order is preserved for display.
//! - Every mutation notifies all observers exactly once, after it is applied.

mod ledger;
mod observer;
mod pickup;

pub use ledger::{ItemEntry, Ledger, LedgerError};
pub use observer::{ObserverId, Observers};
pub use pickup::Pickup;
