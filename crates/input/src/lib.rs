//! Input: named bindings from the host dispatcher mapped to character actions.
//!
//! # Invariants
//! - Every binding name resolves to exactly one action or axis.
//! - Handlers never see raw device events, only `Action`s.

pub mod action;
mod bindings;
mod touch;

pub use action::{Action, InputMode};
pub use bindings::{AxisBinding, ButtonBinding, InputBindings, InputError, KeyEvent};
pub use touch::{TouchOutcome, TouchTracker};
