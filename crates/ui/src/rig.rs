use crafting_common::{Rotator, rotate_angle_axis};
use glam::{Quat, Vec3};

use crate::rotation::Panel;

/// World placement of one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPose {
    pub position: Vec3,
    /// Rotation relative to the viewpoint.
    pub local_rotation: Rotator,
    pub visible: bool,
}

/// The two panels attached to the player's viewpoint.
///
/// Panels orbit the viewpoint about its up axis. Moving or turning the
/// viewpoint carries both panels along.
#[derive(Debug, Clone)]
pub struct PanelRig {
    viewpoint: Vec3,
    orientation: Quat,
    crafting: PanelPose,
    recipe: PanelPose,
}

impl PanelRig {
    /// Place the crafting table at `viewpoint + home_offset` and the recipe
    /// list `recipe_offset_degrees` around the viewpoint's up axis from it.
    /// Both start hidden with `local_rotation` as their orientation.
    pub fn new(
        viewpoint: Vec3,
        orientation: Quat,
        home_offset: Vec3,
        local_rotation: Rotator,
        recipe_offset_degrees: f32,
    ) -> Self {
        let orientation = orientation.normalize();
        let up = orientation * Vec3::Y;
        let recipe_offset = rotate_angle_axis(home_offset, recipe_offset_degrees, up);
        let pose = |position| PanelPose {
            position,
            local_rotation,
            visible: false,
        };
        Self {
            viewpoint,
            orientation,
            crafting: pose(viewpoint + home_offset),
            recipe: pose(viewpoint + recipe_offset),
        }
    }

    pub fn viewpoint(&self) -> Vec3 {
        self.viewpoint
    }

    /// World rotation of the viewpoint the panels hang off.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// The viewpoint's up axis, which panels orbit around.
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    pub fn panel(&self, panel: Panel) -> &PanelPose {
        match panel {
            Panel::CraftingTable => &self.crafting,
            Panel::RecipeList => &self.recipe,
        }
    }

    /// Mutable pose, used to apply sway to the active panel.
    pub fn panel_mut(&mut self, panel: Panel) -> &mut PanelPose {
        match panel {
            Panel::CraftingTable => &mut self.crafting,
            Panel::RecipeList => &mut self.recipe,
        }
    }

    /// Show or hide both panels together.
    pub fn set_visible(&mut self, visible: bool) {
        self.crafting.visible = visible;
        self.recipe.visible = visible;
    }

    /// Move and turn the viewpoint; panels keep their place relative to it.
    pub fn set_view(&mut self, viewpoint: Vec3, orientation: Quat) {
        let orientation = orientation.normalize();
        let turn = orientation * self.orientation.inverse();
        for pose in [&mut self.crafting, &mut self.recipe] {
            pose.position = viewpoint + turn * (pose.position - self.viewpoint);
        }
        self.viewpoint = viewpoint;
        self.orientation = orientation;
    }

    /// Orbit both panels by `degrees` about the up axis, keeping each
    /// panel's distance to the viewpoint.
    pub fn rotate_about_viewpoint(&mut self, degrees: f32) {
        let up = self.up();
        for pose in [&mut self.crafting, &mut self.recipe] {
            let offset = pose.position - self.viewpoint;
            let distance = offset.length();
            if distance <= f32::EPSILON {
                continue;
            }
            let dir = rotate_angle_axis(offset / distance, degrees, up);
            pose.position = self.viewpoint + dir * distance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> PanelRig {
        PanelRig::new(
            Vec3::new(0.0, 64.0, 0.0),
            Quat::IDENTITY,
            Vec3::new(120.0, 0.0, 0.0),
            Rotator::new(0.0, 180.0, 0.0),
            90.0,
        )
    }

    #[test]
    fn panels_start_hidden_at_equal_distance() {
        let rig = rig();
        let c = rig.panel(Panel::CraftingTable);
        let r = rig.panel(Panel::RecipeList);
        assert!(!c.visible && !r.visible);
        let dc = (c.position - rig.viewpoint()).length();
        let dr = (r.position - rig.viewpoint()).length();
        assert!((dc - dr).abs() < 1.0e-3);
        assert_eq!(c.local_rotation.yaw, 180.0);
    }

    #[test]
    fn orbit_preserves_distance_and_height() {
        let mut rig = rig();
        for _ in 0..37 {
            rig.rotate_about_viewpoint(-2.5);
        }
        for panel in [Panel::CraftingTable, Panel::RecipeList] {
            let pose = rig.panel(panel);
            assert!(((pose.position - rig.viewpoint()).length() - 120.0).abs() < 1.0e-2);
            assert!((pose.position.y - 64.0).abs() < 1.0e-3);
        }
    }

    #[test]
    fn full_turn_swaps_home_position() {
        let mut rig = rig();
        let home = rig.panel(Panel::CraftingTable).position;
        rig.rotate_about_viewpoint(-90.0);
        assert!((rig.panel(Panel::RecipeList).position - home).length() < 1.0e-3);
    }

    #[test]
    fn viewpoint_moves_carry_panels() {
        let mut rig = rig();
        let before = rig.panel(Panel::RecipeList).position;
        rig.set_view(Vec3::new(10.0, 64.0, -5.0), Quat::IDENTITY);
        assert_eq!(
            rig.panel(Panel::RecipeList).position,
            before + Vec3::new(10.0, 0.0, -5.0)
        );
    }

    #[test]
    fn turning_the_viewpoint_turns_the_panels() {
        let mut rig = rig();
        let viewpoint = rig.viewpoint();
        rig.set_view(viewpoint, Rotator::new(0.0, 180.0, 0.0).to_quat());
        let crafting = rig.panel(Panel::CraftingTable).position;
        assert!((crafting - Vec3::new(-120.0, 64.0, 0.0)).length() < 1.0e-3);
        let dr = (rig.panel(Panel::RecipeList).position - viewpoint).length();
        assert!((dr - 120.0).abs() < 1.0e-3);
    }

    #[test]
    fn orbit_after_turn_still_swaps_home_position() {
        let mut rig = rig();
        rig.set_view(Vec3::new(30.0, 64.0, 0.0), Rotator::new(0.0, 90.0, 0.0).to_quat());
        let home = rig.panel(Panel::CraftingTable).position;
        assert!((home - Vec3::new(30.0, 64.0, 120.0)).length() < 1.0e-3);
        rig.rotate_about_viewpoint(-90.0);
        assert!((rig.panel(Panel::RecipeList).position - home).length() < 1.0e-3);
    }

    #[test]
    fn visibility_toggles_both() {
        let mut rig = rig();
        rig.set_visible(true);
        assert!(rig.panel(Panel::CraftingTable).visible);
        assert!(rig.panel(Panel::RecipeList).visible);
    }
}
