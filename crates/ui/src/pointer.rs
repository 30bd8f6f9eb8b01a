use crafting_common::Rotator;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// The widget interaction ray cast from the viewpoint toward the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionPointer {
    pub rotation: Rotator,
    pub active: bool,
    pub pressed: bool,
}

impl InteractionPointer {
    /// Point from `viewpoint` at `target` with no smoothing.
    pub fn aim_at(&mut self, viewpoint: Vec3, target: Vec3) {
        self.rotation = Rotator::from_direction(target - viewpoint);
    }

    /// Start casting; the pointer can now hit panels.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Deactivating also releases any held button.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.pressed = false;
    }

    /// Hold the left button on whatever the pointer hits.
    pub fn press(&mut self) {
        self.pressed = true;
    }

    /// Let go of the left button.
    pub fn release(&mut self) {
        self.pressed = false;
    }
}

/// Tuning for the active panel's cursor-follow tilt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwayConfig {
    /// Degrees of pitch at the top/bottom viewport edge.
    pub pitch_scale: f32,
    /// Degrees of yaw at the left/right viewport edge.
    pub yaw_scale: f32,
    pub interp_speed: f32,
}

impl Default for SwayConfig {
    fn default() -> Self {
        Self {
            pitch_scale: 7.0,
            yaw_scale: 5.0,
            interp_speed: 1.0,
        }
    }
}

/// Cursor position relative to the viewport center, in [-1, 1] on each axis
/// while the cursor is inside the viewport. A degenerate viewport gives zero.
pub fn pointer_offset(mouse: Vec2, viewport: Vec2) -> Vec2 {
    let center = viewport / 2.0;
    if center.x <= 0.0 || center.y <= 0.0 {
        return Vec2::ZERO;
    }
    (mouse - center) / center
}

/// Smoothly tilts the active panel toward the cursor.
///
/// The current rotation is shared by both panels so switching panels does not
/// snap.
#[derive(Debug, Clone)]
pub struct PanelSway {
    config: SwayConfig,
    base: Rotator,
    current: Rotator,
}

impl PanelSway {
    /// Sway around `base`, the panels' resting rotation.
    pub fn new(config: SwayConfig, base: Rotator) -> Self {
        Self {
            config,
            base,
            current: base,
        }
    }

    pub fn base(&self) -> Rotator {
        self.base
    }

    /// Rotation after the last `update`.
    pub fn current(&self) -> Rotator {
        self.current
    }

    /// Rotation the panel would settle at for a cursor `offset`. Roll stays
    /// at the base value.
    pub fn target(&self, offset: Vec2) -> Rotator {
        Rotator {
            pitch: self.base.pitch + offset.y * self.config.pitch_scale,
            yaw: self.base.yaw + offset.x * self.config.yaw_scale,
            roll: self.base.roll,
        }
    }

    /// Step toward the target for `offset` and return the new rotation.
    pub fn update(&mut self, offset: Vec2, dt: f32) -> Rotator {
        let target = self.target(offset);
        self.current = self
            .current
            .interp_to(target, dt, self.config.interp_speed);
        self.current
    }
}
