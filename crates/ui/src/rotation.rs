use serde::{Deserialize, Serialize};

use crate::rig::PanelRig;

/// The two inventory UI surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panel {
    CraftingTable,
    RecipeList,
}

impl Panel {
    /// Rotation direction when heading to this panel.
    fn direction(self) -> f32 {
        match self {
            Panel::CraftingTable => 1.0,
            Panel::RecipeList => -1.0,
        }
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Panel::CraftingTable => f.write_str("crafting table"),
            Panel::RecipeList => f.write_str("recipe list"),
        }
    }
}

/// Snapshot of the rotation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    /// Signed degrees rotated away from the crafting table; 0 or -full_angle at rest.
    pub current_angle: f32,
    /// Panel at (or heading to) the home position.
    pub active_panel: Panel,
    pub is_animating: bool,
    /// Signed degrees per second; negative while heading to the recipe list.
    pub angular_speed: f32,
}

/// Drives the orbit between the crafting table (angle 0) and the recipe list
/// (angle `-full_angle`).
#[derive(Debug, Clone)]
pub struct RotationController {
    state: RotationState,
    speed: f32,
    full_angle: f32,
}

impl RotationController {
    /// Idle at the crafting table. `speed` and `full_angle` are magnitudes.
    pub fn new(speed: f32, full_angle: f32) -> Self {
        let speed = speed.abs();
        Self {
            state: RotationState {
                current_angle: 0.0,
                active_panel: Panel::CraftingTable,
                is_animating: false,
                angular_speed: speed,
            },
            speed,
            full_angle: full_angle.abs(),
        }
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn current_angle(&self) -> f32 {
        self.state.current_angle
    }

    pub fn active_panel(&self) -> Panel {
        self.state.active_panel
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    /// Signed rate the angle changes at while animating.
    pub fn angular_speed(&self) -> f32 {
        self.state.angular_speed
    }

    /// Resting angle for `panel`.
    pub fn terminal_angle(&self, panel: Panel) -> f32 {
        match panel {
            Panel::CraftingTable => 0.0,
            Panel::RecipeList => -self.full_angle,
        }
    }

    /// Start (or reverse toward) a rotation to `panel`.
    ///
    /// Returns false when the panel is already fully in place; that case only
    /// stops any animation. Returns true when an animation is running.
    pub fn request_show(&mut self, panel: Panel) -> bool {
        let speed = panel.direction() * self.speed;
        if self.has_reached(panel, self.state.current_angle) {
            self.state.is_animating = false;
            self.state.active_panel = panel;
            self.state.angular_speed = speed;
            return false;
        }
        if self.state.active_panel != panel {
            tracing::debug!(
                from = %self.state.active_panel,
                to = %panel,
                angle = self.state.current_angle,
                "ui rotation reversing"
            );
        }
        self.state.angular_speed = speed;
        self.state.active_panel = panel;
        self.state.is_animating = true;
        true
    }

    /// Rotate the recipe list to the home position.
    pub fn switch_to_recipe_list(&mut self) -> bool {
        self.request_show(Panel::RecipeList)
    }

    /// Rotate the crafting table back to the home position.
    pub fn switch_to_crafting_table(&mut self) -> bool {
        self.request_show(Panel::CraftingTable)
    }

    /// Advance the angle by `angular_speed * dt`, stopping exactly on the
    /// target. Returns the signed degrees actually applied.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if !self.state.is_animating {
            return 0.0;
        }
        let panel = self.state.active_panel;
        let target = self.terminal_angle(panel);
        let from = self.state.current_angle;
        let mut to = from + self.state.angular_speed * dt.max(0.0);
        if self.has_reached(panel, to) {
            to = target;
            self.state.is_animating = false;
            tracing::debug!(panel = %panel, "ui rotation settled");
        }
        self.state.current_angle = to;
        to - from
    }

    /// Advance and carry both panels of `rig` around the viewpoint.
    pub fn tick(&mut self, dt: f32, rig: &mut PanelRig) -> f32 {
        let delta = self.advance(dt);
        if delta != 0.0 {
            rig.rotate_about_viewpoint(delta);
        }
        tracing::trace!(
            angle = self.state.current_angle,
            animating = self.state.is_animating,
            "ui rotation tick"
        );
        delta
    }

    fn has_reached(&self, panel: Panel, angle: f32) -> bool {
        let target = self.terminal_angle(panel);
        match panel {
            Panel::CraftingTable => angle >= target,
            Panel::RecipeList => angle <= target,
        }
    }
}
