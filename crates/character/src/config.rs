use crafting_common::Rotator;
use crafting_ui::SwayConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a character config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tuning for the character and its inventory UI.
///
/// Every field has a default, so a config file only lists overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Yaw rate at full stick deflection, degrees per second.
    pub base_turn_rate: f32,
    /// Pitch rate at full stick deflection, degrees per second.
    pub base_look_up_rate: f32,
    /// Panel orbit speed, degrees per second.
    pub ui_speed: f32,
    /// Angle between the two panels around the viewpoint.
    pub recipe_offset_degrees: f32,
    /// Distance from the viewpoint to each panel.
    pub panel_distance: f32,
    /// Viewpoint height above the actor origin.
    pub eye_height: f32,
    /// Panel orientation relative to the viewpoint at rest.
    pub panel_rotation: Rotator,
    pub capsule_radius: f32,
    pub capsule_half_height: f32,
    /// Drag distance in pixels that turns a touch into a swipe.
    pub touch_drag_threshold: f32,
    pub sway: SwayConfig,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            base_turn_rate: 45.0,
            base_look_up_rate: 45.0,
            ui_speed: 90.0,
            recipe_offset_degrees: 90.0,
            panel_distance: 100.0,
            eye_height: 64.0,
            panel_rotation: Rotator::new(0.0, 180.0, 0.0),
            capsule_radius: 55.0,
            capsule_half_height: 96.0,
            touch_drag_threshold: 4.0,
            sway: SwayConfig::default(),
        }
    }
}

impl CharacterConfig {
    /// Read and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "character config loaded");
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("ui_speed", self.ui_speed)?;
        positive("recipe_offset_degrees", self.recipe_offset_degrees)?;
        positive("panel_distance", self.panel_distance)?;
        positive("capsule_radius", self.capsule_radius)?;
        positive("capsule_half_height", self.capsule_half_height)?;
        positive("sway.interp_speed", self.sway.interp_speed)?;
        non_negative("base_turn_rate", self.base_turn_rate)?;
        non_negative("base_look_up_rate", self.base_look_up_rate)?;
        non_negative("eye_height", self.eye_height)?;
        non_negative("touch_drag_threshold", self.touch_drag_threshold)?;
        if self.recipe_offset_degrees > 180.0 {
            return Err(ConfigError::Invalid {
                field: "recipe_offset_degrees",
                reason: format!("{} exceeds 180", self.recipe_offset_degrees),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be a finite number above zero"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be a finite number, zero or above"),
        })
    }
}
