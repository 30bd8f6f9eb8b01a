//! The player character: owns the inventory ledger and the dual-panel UI.
//!
//! # Invariants
//! - Ledger and UI state are owned by the character and mutated only from
//!   its action handlers, overlap callbacks, and `tick`.
//! - While the inventory is open, look input never reaches the host.
//! - Within a frame: actions first, then `tick` (pointer aim, panel sway,
//!   rotation).

mod character;
mod config;
mod host;

pub use character::Character;
pub use config::{CharacterConfig, ConfigError};
pub use host::{HeadlessHost, Host};
