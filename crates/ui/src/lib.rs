//! Inventory UI: two panels orbiting the viewpoint, switched by rotation.
//!
//! # Invariants
//! - `current_angle` stays within [-full_angle, 0].
//! - Panels keep their distance from the viewpoint while orbiting.
//! - A new switch request may reverse an in-flight rotation; the angle is
//!   never reset.

mod pointer;
mod rig;
mod rotation;

pub use pointer::{InteractionPointer, PanelSway, SwayConfig, pointer_offset};
pub use rig::{PanelPose, PanelRig};
pub use rotation::{Panel, RotationController, RotationState};
