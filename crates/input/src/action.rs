use serde::{Deserialize, Serialize};

/// A character-level command produced from a binding.
///
/// The character consumes actions, never raw input events. Axis actions carry
/// the value reported by the host for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Walk along the actor's forward vector.
    MoveForward(f32),
    /// Strafe along the actor's right vector.
    MoveRight(f32),
    /// Absolute yaw delta (mouse).
    Turn(f32),
    /// Normalized yaw rate (stick); scaled by base turn rate and frame time.
    TurnRate(f32),
    /// Absolute pitch delta (mouse).
    LookUp(f32),
    /// Normalized pitch rate (stick).
    LookUpRate(f32),
    Jump,
    StopJumping,
    Fire,
    StopFire,
    ToggleInventory,
    ResetVr,
}

/// How the host routes input while the character is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// Input goes to the game only; cursor hidden.
    GameOnly,
    /// UI widgets receive input alongside the game; cursor shown.
    GameAndUi {
        lock_mouse_to_viewport: bool,
        hide_cursor_during_capture: bool,
    },
}

impl InputMode {
    /// Routing used while the inventory is open.
    pub fn inventory() -> Self {
        InputMode::GameAndUi {
            lock_mouse_to_viewport: true,
            hide_cursor_during_capture: false,
        }
    }

    /// Whether the host should draw the mouse cursor in this mode.
    pub fn shows_cursor(&self) -> bool {
        matches!(self, InputMode::GameAndUi { .. })
    }
}
