//! Scene kernel: the pickup actors the player can collide with.
//!
//! # Invariants
//! - All state mutations flow through explicit operations and are logged.
//! - Iteration over actors is deterministic (BTreeMap by id).

pub mod world;

pub use world::{Capsule, PickupActor, World, WorldEvent};
