use crafting_common::{EntityId, ItemKind, Transform};
use crafting_inventory::Pickup;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An event record produced by every mutation to the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// Pickup placed in the scene.
    PickupSpawned {
        id: EntityId,
        kind: ItemKind,
        position: Vec3,
    },
    /// Pickup removed because a player took it.
    PickupCollected { id: EntityId, kind: ItemKind },
    /// Pickup removed for any other reason.
    PickupDespawned { id: EntityId },
    /// Simulation advanced one frame.
    Stepped { tick: u64, dt: f32 },
}

/// A collectible placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupActor {
    pub transform: Transform,
    pub pickup: Pickup,
}

/// Upright collision capsule used for overlap tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    pub center: Vec3,
    pub radius: f32,
    pub half_height: f32,
}

impl Capsule {
    /// True when `point` lies within `radius` horizontally and
    /// `half_height` vertically of the center.
    pub fn contains(&self, point: Vec3) -> bool {
        let d = point - self.center;
        let horizontal = d.x * d.x + d.z * d.z;
        horizontal <= self.radius * self.radius && d.y.abs() <= self.half_height
    }
}

/// The scene of pickup actors.
///
/// Uses BTreeMap so overlap results come back in a stable order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pickups: BTreeMap<EntityId, PickupActor>,
    tick: u64,
    elapsed: f64,
    /// Append-only event log of all mutations.
    #[serde(skip)]
    event_log: Vec<WorldEvent>,
}

impl World {
    /// Create an empty scene at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames stepped so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Seconds simulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Pickups still in the scene.
    pub fn pickup_count(&self) -> usize {
        self.pickups.len()
    }

    pub fn pickups(&self) -> &BTreeMap<EntityId, PickupActor> {
        &self.pickups
    }

    /// Look up a pickup actor by id.
    pub fn get(&self, id: EntityId) -> Option<&PickupActor> {
        self.pickups.get(&id)
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Events recorded since the last drain.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Place a pickup. Returns its id.
    pub fn spawn_pickup(&mut self, transform: Transform, pickup: Pickup) -> EntityId {
        let id = EntityId::new();
        self.spawn_pickup_with_id(id, transform, pickup);
        id
    }

    /// Place a pickup under a known id, replacing any actor with that id.
    pub fn spawn_pickup_with_id(&mut self, id: EntityId, transform: Transform, pickup: Pickup) {
        tracing::debug!(id = %id.short(), kind = %pickup.kind, "pickup spawned");
        self.event_log.push(WorldEvent::PickupSpawned {
            id,
            kind: pickup.kind.clone(),
            position: transform.position,
        });
        self.pickups.insert(id, PickupActor { transform, pickup });
    }

    /// Remove a pickup without crediting anyone.
    pub fn despawn(&mut self, id: EntityId) -> Option<PickupActor> {
        let actor = self.pickups.remove(&id);
        if actor.is_some() {
            self.event_log.push(WorldEvent::PickupDespawned { id });
        }
        actor
    }

    /// Remove a pickup that a player took, returning what it carried.
    pub fn collect(&mut self, id: EntityId) -> Option<Pickup> {
        let actor = self.pickups.remove(&id)?;
        tracing::debug!(id = %id.short(), kind = %actor.pickup.kind, "pickup collected");
        self.event_log.push(WorldEvent::PickupCollected {
            id,
            kind: actor.pickup.kind.clone(),
        });
        Some(actor.pickup)
    }

    /// Pickups whose position lies inside `capsule`.
    pub fn overlapping(&self, capsule: &Capsule) -> Vec<EntityId> {
        self.pickups
            .iter()
            .filter(|(_, actor)| capsule.contains(actor.transform.position))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Advance the scene clock by one frame of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed += f64::from(dt.max(0.0));
        self.event_log.push(WorldEvent::Stepped {
            tick: self.tick,
            dt,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crafting_common::CommonType;

    fn at(x: f32, y: f32, z: f32) -> Transform {
        Transform::from_position(Vec3::new(x, y, z))
    }

    fn capsule() -> Capsule {
        Capsule {
            center: Vec3::ZERO,
            radius: 55.0,
            half_height: 96.0,
        }
    }

    #[test]
    fn world_starts_empty() {
        let w = World::new();
        assert_eq!(w.tick(), 0);
        assert_eq!(w.pickup_count(), 0);
    }

    #[test]
    fn spawn_and_despawn() {
        let mut w = World::new();
        let id = w.spawn_pickup(Transform::default(), Pickup::new(CommonType::Scrap));
        assert_eq!(w.pickup_count(), 1);
        assert!(w.get(id).is_some());

        assert!(w.despawn(id).is_some());
        assert!(w.despawn(id).is_none());
        assert_eq!(w.pickup_count(), 0);
    }

    #[test]
    fn step_advances_clock() {
        let mut w = World::new();
        w.step(0.5);
        w.step(0.25);
        w.step(0.0);
        assert_eq!(w.tick(), 3);
        assert!((w.elapsed() - 0.75).abs() < 1.0e-9);
    }

    #[test]
    fn capsule_bounds() {
        let c = capsule();
        assert!(c.contains(Vec3::new(30.0, 90.0, 30.0)));
        assert!(!c.contains(Vec3::new(50.0, 0.0, 50.0)));
        assert!(!c.contains(Vec3::new(0.0, -97.0, 0.0)));
    }

    #[test]
    fn overlapping_finds_only_nearby() {
        let mut w = World::new();
        let near = w.spawn_pickup(at(10.0, 0.0, 0.0), Pickup::new(CommonType::Scrap));
        w.spawn_pickup(at(500.0, 0.0, 0.0), Pickup::new(CommonType::Alcohol));
        assert_eq!(w.overlapping(&capsule()), vec![near]);
    }

    #[test]
    fn collect_returns_pickup_and_logs() {
        let mut w = World::new();
        let pickup = Pickup::new(CommonType::Biowaste).rare();
        let id = w.spawn_pickup(Transform::default(), pickup);
        let pickup = w.collect(id).unwrap();
        assert!(pickup.is_rare);
        assert!(w.collect(id).is_none());
        assert_eq!(
            w.events().last(),
            Some(&WorldEvent::PickupCollected {
                id,
                kind: CommonType::Biowaste.into(),
            })
        );
    }

    #[test]
    fn events_are_recorded() {
        let mut w = World::new();
        let id = w.spawn_pickup(Transform::default(), Pickup::new(CommonType::Scrap));
        w.step(0.016);
        w.despawn(id);
        assert_eq!(w.events().len(), 3);
    }

    #[test]
    fn drain_events_clears_log() {
        let mut w = World::new();
        w.spawn_pickup(Transform::default(), Pickup::new(CommonType::Scrap));
        let events = w.drain_events();
        assert_eq!(events.len(), 1);
        assert!(w.events().is_empty());
    }

    #[test]
    fn overlap_order_is_deterministic() {
        let mut w = World::new();
        for _ in 0..20 {
            w.spawn_pickup(Transform::default(), Pickup::new(CommonType::Electrics));
        }
        let hits = w.overlapping(&capsule());
        let mut sorted = hits.clone();
        sorted.sort();
        assert_eq!(hits, sorted);
    }
}
