//! Shared types for the crafting workspace.
//!
//! # Conventions
//! - World space is Y-up. A zero rotator faces +X.
//! - Angles on `Rotator` are degrees; glam math is radians.

mod item;
mod rotator;
mod types;

pub use item::{CommonType, ItemKind, ParseItemKindError};
pub use rotator::{Rotator, normalize_axis, rotate_angle_axis};
pub use types::{EntityId, Transform};
