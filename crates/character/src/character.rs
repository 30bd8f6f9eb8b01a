use crafting_common::{ItemKind, Rotator, Transform};
use crafting_input::{Action, InputMode, TouchOutcome, TouchTracker};
use crafting_inventory::{ItemEntry, Ledger, ObserverId, Pickup};
use crafting_kernel::{Capsule, World};
use crafting_ui::{
    InteractionPointer, Panel, PanelRig, PanelSway, RotationController, pointer_offset,
};
use glam::{Vec2, Vec3};

use crate::config::CharacterConfig;
use crate::host::Host;

/// The first-person player with a crafting inventory.
#[derive(Debug)]
pub struct Character {
    config: CharacterConfig,
    transform: Transform,
    ledger: Ledger,
    rotation: RotationController,
    rig: PanelRig,
    sway: PanelSway,
    pointer: InteractionPointer,
    touch: TouchTracker,
    inventory_open: bool,
    viewmodel_visible: bool,
    input_mode: InputMode,
    /// Length of the last ticked frame; scales rate-based look input.
    frame_dt: f32,
}

impl Character {
    /// Spawn at `transform` with the inventory closed and the crafting table home.
    pub fn new(config: CharacterConfig, transform: Transform) -> Self {
        let viewpoint = transform.position + transform.up() * config.eye_height;
        let rig = PanelRig::new(
            viewpoint,
            transform.rotation,
            transform.forward() * config.panel_distance,
            config.panel_rotation,
            config.recipe_offset_degrees,
        );
        Self {
            rotation: RotationController::new(config.ui_speed, config.recipe_offset_degrees),
            sway: PanelSway::new(config.sway, config.panel_rotation),
            touch: TouchTracker::new(config.touch_drag_threshold),
            rig,
            pointer: InteractionPointer::default(),
            ledger: Ledger::new(),
            inventory_open: false,
            viewmodel_visible: true,
            input_mode: InputMode::GameOnly,
            frame_dt: 0.0,
            transform,
            config,
        }
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Move or turn the actor; the viewpoint and panels follow.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        let viewpoint = transform.position + transform.up() * self.config.eye_height;
        self.rig.set_view(viewpoint, transform.rotation);
    }

    /// Face along `rotation`, as reported by the controller after look input.
    pub fn set_control_rotation(&mut self, rotation: Rotator) {
        self.set_transform(Transform {
            rotation: rotation.to_quat(),
            ..self.transform
        });
    }

    /// Eye position the panels hang off.
    pub fn viewpoint(&self) -> Vec3 {
        self.rig.viewpoint()
    }

    /// Collision capsule around the actor origin.
    pub fn capsule(&self) -> Capsule {
        Capsule {
            center: self.transform.position,
            radius: self.config.capsule_radius,
            half_height: self.config.capsule_half_height,
        }
    }

    /// The inventory held by this character.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Panel switch state.
    pub fn rotation(&self) -> &RotationController {
        &self.rotation
    }

    pub fn rig(&self) -> &PanelRig {
        &self.rig
    }

    pub fn sway(&self) -> &PanelSway {
        &self.sway
    }

    pub fn pointer(&self) -> &InteractionPointer {
        &self.pointer
    }

    /// Whether the inventory panels are shown.
    pub fn is_inventory_open(&self) -> bool {
        self.inventory_open
    }

    /// Whether the first-person arms and weapon are drawn.
    pub fn viewmodel_visible(&self) -> bool {
        self.viewmodel_visible
    }

    /// Input routing last requested from the host.
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    // --- Inventory ---

    pub fn increase_item_number(&mut self, pickup: &Pickup) -> u32 {
        self.ledger.increase_pickup(pickup)
    }

    pub fn increase_item_number_entry(&mut self, entry: ItemEntry) -> u32 {
        self.ledger.increase_entry(entry)
    }

    pub fn increase_item_kind(&mut self, kind: ItemKind, is_rare: bool) -> u32 {
        self.ledger.increase(kind, is_rare)
    }

    pub fn decrease_item_number(&mut self, pickup: &Pickup) -> u32 {
        self.ledger.decrease_pickup(pickup)
    }

    pub fn decrease_item_number_entry(&mut self, entry: &ItemEntry) -> u32 {
        self.ledger.decrease_entry(entry)
    }

    pub fn decrease_item_kind(&mut self, kind: &ItemKind) -> u32 {
        self.ledger.decrease(kind)
    }

    /// Subscribe to "inventory changed". The callback gets no arguments.
    pub fn on_inventory_changed(&mut self, callback: impl FnMut() + 'static) -> ObserverId {
        self.ledger.subscribe(callback)
    }

    pub fn remove_inventory_observer(&mut self, id: ObserverId) -> bool {
        self.ledger.unsubscribe(id)
    }

    /// Overlap callback: the character started touching a pickup.
    pub fn on_begin_overlap(&mut self, pickup: &Pickup) -> u32 {
        let count = self.ledger.increase_pickup(pickup);
        tracing::info!(kind = %pickup.kind, count, "picked up");
        count
    }

    /// Collect every pickup inside the capsule. Returns how many were taken.
    pub fn pick_up_overlapping(&mut self, world: &mut World) -> usize {
        let mut taken = 0;
        for id in world.overlapping(&self.capsule()) {
            if let Some(pickup) = world.collect(id) {
                self.on_begin_overlap(&pickup);
                taken += 1;
            }
        }
        taken
    }

    // --- UI ---

    pub fn switch_to_recipe_list(&mut self) -> bool {
        self.rotation.switch_to_recipe_list()
    }

    pub fn switch_to_crafting_table(&mut self) -> bool {
        self.rotation.switch_to_crafting_table()
    }

    /// Open the inventory if closed, close it if open.
    pub fn toggle_inventory(&mut self, host: &mut impl Host) {
        self.inventory_open = !self.inventory_open;
        let open = self.inventory_open;

        self.viewmodel_visible = !open;
        self.rig.set_visible(open);

        if open {
            self.rotation.switch_to_crafting_table();
            host.set_mouse_position(host.viewport_size() / 2.0);
            self.input_mode = InputMode::inventory();
            self.pointer.activate();
        } else {
            self.input_mode = InputMode::GameOnly;
            self.pointer.deactivate();
        }
        host.set_input_mode(self.input_mode);
        host.set_cursor_visible(self.input_mode.shows_cursor());
        tracing::info!(open, "inventory toggled");
    }

    // --- Input ---

    /// Route one input action. Call before `tick` within a frame.
    pub fn handle_action(&mut self, action: Action, host: &mut impl Host) {
        match action {
            Action::MoveForward(value) => self.add_movement(self.transform.forward(), value, host),
            Action::MoveRight(value) => self.add_movement(self.transform.right(), value, host),
            Action::Turn(value) => self.add_yaw_input(value, host),
            Action::TurnRate(rate) => {
                let value = rate * self.config.base_turn_rate * self.frame_dt;
                self.add_yaw_input(value, host)
            }
            Action::LookUp(value) => self.add_pitch_input(value, host),
            Action::LookUpRate(rate) => {
                let value = rate * self.config.base_look_up_rate * self.frame_dt;
                self.add_pitch_input(value, host)
            }
            Action::Jump => host.jump(),
            Action::StopJumping => host.stop_jumping(),
            Action::Fire => self.fire(host),
            Action::StopFire => self.pointer.release(),
            Action::ToggleInventory => self.toggle_inventory(host),
            Action::ResetVr => host.reset_vr_orientation(),
        }
    }

    /// Yaw look input. Dropped entirely while the inventory is open.
    pub fn add_yaw_input(&mut self, value: f32, host: &mut impl Host) {
        if value != 0.0 && !self.inventory_open {
            host.add_yaw_input(value);
        }
    }

    /// Pitch look input. Dropped entirely while the inventory is open.
    pub fn add_pitch_input(&mut self, value: f32, host: &mut impl Host) {
        if value != 0.0 && !self.inventory_open {
            host.add_pitch_input(value);
        }
    }

    fn add_movement(&self, direction: Vec3, value: f32, host: &mut impl Host) {
        if value != 0.0 {
            host.add_movement_input(direction, value);
        }
    }

    /// Shoot when playing; click the UI when the inventory is open.
    pub fn fire(&mut self, host: &mut impl Host) {
        if self.inventory_open {
            self.pointer.press();
        } else {
            host.fire_projectile();
        }
    }

    pub fn begin_touch(&mut self, finger: u32, location: Vec2) {
        self.touch.begin(finger, location);
    }

    pub fn update_touch(&mut self, finger: u32, location: Vec2) {
        self.touch.update(finger, location);
    }

    /// A tap (no drag, same finger) fires.
    pub fn end_touch(&mut self, finger: u32, host: &mut impl Host) {
        if self.touch.end(finger) == TouchOutcome::Tap {
            self.fire(host);
        }
    }

    // --- Frame ---

    /// Per-frame update: pointer aim and panel sway while the inventory is
    /// open and settled, then the panel rotation.
    pub fn tick(&mut self, dt: f32, host: &impl Host) {
        let _span = tracing::info_span!("character_tick").entered();
        self.frame_dt = dt.max(0.0);

        if self.inventory_open && !self.rotation.is_animating() {
            if let Some(target) = host.hit_under_cursor() {
                self.pointer.aim_at(self.rig.viewpoint(), target);
            }
            let offset = pointer_offset(host.mouse_position(), host.viewport_size());
            let rotation = self.sway.update(offset, self.frame_dt);
            self.rig.panel_mut(self.rotation.active_panel()).local_rotation = rotation;
        }

        self.rotation.tick(self.frame_dt, &mut self.rig);
    }

    /// Panel currently at (or heading to) the home position.
    pub fn active_panel(&self) -> Panel {
        self.rotation.active_panel()
    }
}
