use crafting_input::InputMode;
use glam::{Vec2, Vec3};

/// The engine services the character consumes.
///
/// Implemented by whatever owns the camera, cursor, physics and spawning.
/// The character only reads queries and issues commands through this trait.
pub trait Host {
    /// World-space point under the cursor, if the ray hit anything.
    fn hit_under_cursor(&self) -> Option<Vec3>;
    /// Viewport size in pixels.
    fn viewport_size(&self) -> Vec2;
    /// Cursor position in viewport pixels.
    fn mouse_position(&self) -> Vec2;
    fn set_mouse_position(&mut self, position: Vec2);
    fn set_input_mode(&mut self, mode: InputMode);
    fn set_cursor_visible(&mut self, visible: bool);
    /// Rotate the controller's yaw by `value` (already scaled).
    fn add_yaw_input(&mut self, value: f32);
    /// Rotate the controller's pitch by `value` (already scaled).
    fn add_pitch_input(&mut self, value: f32);
    fn add_movement_input(&mut self, direction: Vec3, scale: f32);
    fn jump(&mut self);
    fn stop_jumping(&mut self);
    /// Spawn a projectile from the weapon muzzle.
    fn fire_projectile(&mut self);
    fn reset_vr_orientation(&mut self);
}

/// A host with no engine behind it.
///
/// Queries return whatever was last set; commands are recorded so callers
/// (tests, the CLI demo) can inspect them.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    pub viewport: Vec2,
    pub mouse: Vec2,
    pub hit: Option<Vec3>,
    pub input_mode: InputMode,
    pub cursor_visible: bool,
    pub yaw: f32,
    pub pitch: f32,
    pub movement: Vec<(Vec3, f32)>,
    pub jumping: bool,
    pub projectiles_fired: u32,
    pub vr_resets: u32,
}

impl HeadlessHost {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            mouse: Vec2::ZERO,
            hit: None,
            input_mode: InputMode::GameOnly,
            cursor_visible: false,
            yaw: 0.0,
            pitch: 0.0,
            movement: Vec::new(),
            jumping: false,
            projectiles_fired: 0,
            vr_resets: 0,
        }
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new(Vec2::new(1280.0, 720.0))
    }
}

impl Host for HeadlessHost {
    fn hit_under_cursor(&self) -> Option<Vec3> {
        self.hit
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn mouse_position(&self) -> Vec2 {
        self.mouse
    }

    fn set_mouse_position(&mut self, position: Vec2) {
        self.mouse = position;
    }

    fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn add_yaw_input(&mut self, value: f32) {
        self.yaw += value;
    }

    fn add_pitch_input(&mut self, value: f32) {
        self.pitch += value;
    }

    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.movement.push((direction, scale));
    }

    fn jump(&mut self) {
        self.jumping = true;
    }

    fn stop_jumping(&mut self) {
        self.jumping = false;
    }

    fn fire_projectile(&mut self) {
        self.projectiles_fired += 1;
    }

    fn reset_vr_orientation(&mut self) {
        self.vr_resets += 1;
    }
}
