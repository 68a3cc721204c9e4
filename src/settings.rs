//! Simulation settings
//!
//! Read once at startup (JSON file or built-in defaults) and never mutated
//! while the simulation runs. World bounds may later change through resize
//! events, but that is world state, not configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Physics, interaction and pacing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    pub width: f32,
    pub height: f32,
    pub body_count: usize,
    pub body_radius: f32,

    // === Motion ===
    /// Added to vertical velocity each tick while above the floor
    pub gravity: f32,
    /// Vertical rebound factor at floor/ceiling
    pub floor_damping: f32,
    /// Horizontal rebound factor at side walls
    pub wall_damping: f32,
    /// Horizontal velocity factor per tick of floor/ceiling contact
    pub bounce_friction: f32,
    pub min_rest_speed_y: f32,
    pub min_rest_speed_x: f32,
    pub restitution: f32,

    // === Trails & pointer ===
    pub trail_capacity: usize,
    pub trajectory_window: usize,
    pub trajectory_weight: f32,
    pub pointer_sensitivity: f32,

    // === Pacing ===
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            body_count: BODY_COUNT,
            body_radius: BODY_RADIUS,

            gravity: GRAVITY,
            floor_damping: FLOOR_DAMPING,
            wall_damping: WALL_DAMPING,
            bounce_friction: BOUNCE_FRICTION,
            min_rest_speed_y: MIN_REST_SPEED_Y,
            min_rest_speed_x: MIN_REST_SPEED_X,
            restitution: RESTITUTION,

            trail_capacity: TRAIL_CAPACITY,
            trajectory_window: TRAJECTORY_WINDOW,
            trajectory_weight: TRAJECTORY_WEIGHT,
            pointer_sensitivity: POINTER_SENSITIVITY,

            tick_rate: TICK_RATE,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a settings file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Check every field against the ranges the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::invalid("width/height", "bounds must be positive"));
        }
        if !(self.body_radius > 0.0) {
            return Err(ConfigError::invalid("body_radius", "must be positive"));
        }
        if self.body_radius * 2.0 > self.width.min(self.height) {
            return Err(ConfigError::invalid(
                "body_radius",
                format!(
                    "a body of radius {} does not fit in {}x{}",
                    self.body_radius, self.width, self.height
                ),
            ));
        }
        if !(self.gravity >= 0.0) {
            return Err(ConfigError::invalid("gravity", "must not be negative"));
        }
        for (field, value) in [
            ("floor_damping", self.floor_damping),
            ("wall_damping", self.wall_damping),
            ("bounce_friction", self.bounce_friction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::invalid(field, "must be in (0, 1]"));
            }
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::invalid("restitution", "must be in [0, 1]"));
        }
        if !(self.min_rest_speed_x >= 0.0 && self.min_rest_speed_y >= 0.0) {
            return Err(ConfigError::invalid("min_rest_speed", "must not be negative"));
        }
        if self.trail_capacity == 0 {
            return Err(ConfigError::invalid("trail_capacity", "must hold at least one point"));
        }
        if self.trajectory_window == 0 {
            return Err(ConfigError::invalid("trajectory_window", "must be at least 1"));
        }
        if !(self.trajectory_weight > 0.0) {
            return Err(ConfigError::invalid("trajectory_weight", "must be positive"));
        }
        if !(self.pointer_sensitivity >= 0.0) {
            return Err(ConfigError::invalid("pointer_sensitivity", "must not be negative"));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::invalid("tick_rate", "must be positive"));
        }
        Ok(())
    }

    /// Wall-clock duration of one tick
    pub fn tick_period(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.tick_rate as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "gravity": 0.5, "body_count": 3 }"#).unwrap();
        assert_eq!(settings.gravity, 0.5);
        assert_eq!(settings.body_count, 3);
        assert_eq!(settings.trail_capacity, TRAIL_CAPACITY);
        assert_eq!(settings.width, WORLD_WIDTH);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json(r#"{ "body_radius": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "body_radius", .. }));

        let err = Settings::from_json(r#"{ "restitution": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "restitution", .. }));

        let err = Settings::from_json(r#"{ "trail_capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "trail_capacity", .. }));

        let err = Settings::from_json(r#"{ "floor_damping": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "floor_damping", .. }));
    }

    #[test]
    fn test_rejects_oversized_body() {
        let err = Settings::from_json(r#"{ "height": 80.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "body_radius", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load(Some(Path::new("/nonexistent/bouncy-balls.json")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_tick_period() {
        let settings = Settings {
            tick_rate: 100,
            ..Default::default()
        };
        assert_eq!(settings.tick_period(), std::time::Duration::from_millis(10));
    }
}
