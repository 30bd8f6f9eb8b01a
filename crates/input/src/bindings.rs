use std::collections::BTreeMap;

use crate::action::Action;

/// Errors from binding dispatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("no binding named {0:?}")]
    UnknownBinding(String),
}

/// Continuous inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisBinding {
    MoveForward,
    MoveRight,
    Turn,
    TurnRate,
    LookUp,
    LookUpRate,
}

/// Discrete inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonBinding {
    Jump,
    Inventory,
    Fire,
    ResetVr,
}

/// Edge of a discrete input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed,
    Released,
}

/// Name → binding table, looked up when the host dispatches an input.
#[derive(Debug, Clone)]
pub struct InputBindings {
    axes: BTreeMap<String, AxisBinding>,
    buttons: BTreeMap<String, ButtonBinding>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind_button("Jump", ButtonBinding::Jump);
        bindings.bind_button("Inventory", ButtonBinding::Inventory);
        bindings.bind_button("Fire", ButtonBinding::Fire);
        bindings.bind_button("ResetVR", ButtonBinding::ResetVr);

        bindings.bind_axis("MoveForward", AxisBinding::MoveForward);
        bindings.bind_axis("MoveRight", AxisBinding::MoveRight);
        // "Turn"/"LookUp" take absolute deltas (mouse); the "Rate" variants
        // take normalized rates (analog sticks).
        bindings.bind_axis("Turn", AxisBinding::Turn);
        bindings.bind_axis("TurnRate", AxisBinding::TurnRate);
        bindings.bind_axis("LookUp", AxisBinding::LookUp);
        bindings.bind_axis("LookUpRate", AxisBinding::LookUpRate);
        bindings
    }
}

impl InputBindings {
    /// A table with nothing bound.
    pub fn empty() -> Self {
        Self {
            axes: BTreeMap::new(),
            buttons: BTreeMap::new(),
        }
    }

    /// Bind (or rebind) an axis name.
    pub fn bind_axis(&mut self, name: impl Into<String>, axis: AxisBinding) {
        self.axes.insert(name.into(), axis);
    }

    /// Bind (or rebind) a button name.
    pub fn bind_button(&mut self, name: impl Into<String>, button: ButtonBinding) {
        self.buttons.insert(name.into(), button);
    }

    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(String::as_str)
    }

    pub fn button_names(&self) -> impl Iterator<Item = &str> {
        self.buttons.keys().map(String::as_str)
    }

    /// Resolve an axis update to its action.
    pub fn axis(&self, name: &str, value: f32) -> Result<Action, InputError> {
        let axis = self
            .axes
            .get(name)
            .ok_or_else(|| InputError::UnknownBinding(name.to_string()))?;
        Ok(match axis {
            AxisBinding::MoveForward => Action::MoveForward(value),
            AxisBinding::MoveRight => Action::MoveRight(value),
            AxisBinding::Turn => Action::Turn(value),
            AxisBinding::TurnRate => Action::TurnRate(value),
            AxisBinding::LookUp => Action::LookUp(value),
            AxisBinding::LookUpRate => Action::LookUpRate(value),
        })
    }

    /// Resolve a button edge to its action. Edges with no handler yield `None`.
    pub fn button(&self, name: &str, event: KeyEvent) -> Result<Option<Action>, InputError> {
        let button = self
            .buttons
            .get(name)
            .ok_or_else(|| InputError::UnknownBinding(name.to_string()))?;
        let action = match (button, event) {
            (ButtonBinding::Jump, KeyEvent::Pressed) => Some(Action::Jump),
            (ButtonBinding::Jump, KeyEvent::Released) => Some(Action::StopJumping),
            (ButtonBinding::Inventory, KeyEvent::Pressed) => Some(Action::ToggleInventory),
            (ButtonBinding::Fire, KeyEvent::Pressed) => Some(Action::Fire),
            (ButtonBinding::Fire, KeyEvent::Released) => Some(Action::StopFire),
            (ButtonBinding::ResetVr, KeyEvent::Pressed) => Some(Action::ResetVr),
            (ButtonBinding::Inventory | ButtonBinding::ResetVr, KeyEvent::Released) => None,
        };
        tracing::trace!(name, ?event, ?action, "button dispatched");
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_are_bound() {
        let bindings = InputBindings::default();
        let axes: Vec<&str> = bindings.axis_names().collect();
        for name in ["MoveForward", "MoveRight", "Turn", "TurnRate", "LookUp", "LookUpRate"] {
            assert!(axes.contains(&name), "missing axis {name}");
        }
        let buttons: Vec<&str> = bindings.button_names().collect();
        for name in ["Jump", "Inventory", "Fire", "ResetVR"] {
            assert!(buttons.contains(&name), "missing button {name}");
        }
    }

    #[test]
    fn axis_carries_value() {
        let bindings = InputBindings::default();
        assert_eq!(bindings.axis("TurnRate", 0.5), Ok(Action::TurnRate(0.5)));
        assert_eq!(bindings.axis("LookUp", -2.0), Ok(Action::LookUp(-2.0)));
    }

    #[test]
    fn fire_press_and_release() {
        let bindings = InputBindings::default();
        assert_eq!(bindings.button("Fire", KeyEvent::Pressed), Ok(Some(Action::Fire)));
        assert_eq!(
            bindings.button("Fire", KeyEvent::Released),
            Ok(Some(Action::StopFire))
        );
    }

    #[test]
    fn inventory_toggles_on_press_only() {
        let bindings = InputBindings::default();
        assert_eq!(
            bindings.button("Inventory", KeyEvent::Pressed),
            Ok(Some(Action::ToggleInventory))
        );
        assert_eq!(bindings.button("Inventory", KeyEvent::Released), Ok(None));
    }

    #[test]
    fn unknown_names_error() {
        let bindings = InputBindings::default();
        assert_eq!(
            bindings.axis("Strafe", 1.0),
            Err(InputError::UnknownBinding("Strafe".into()))
        );
        assert!(bindings.button("Crouch", KeyEvent::Pressed).is_err());
    }

    #[test]
    fn rebinding_replaces() {
        let mut bindings = InputBindings::empty();
        bindings.bind_button("Tab", ButtonBinding::Inventory);
        assert_eq!(
            bindings.button("Tab", KeyEvent::Pressed),
            Ok(Some(Action::ToggleInventory))
        );
        assert!(bindings.button("Inventory", KeyEvent::Pressed).is_err());
    }
}
