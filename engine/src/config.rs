//! Character & Camera Configuration
//!
//! All tunables for the locomotion motor and the orbit camera, grouped into
//! plain serde-derived structs with documented defaults. Configs load from
//! and save to JSON files; `validate()` rejects values the runtime code
//! assumes are sane so the tick path never has to re-check them.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::physics::SurfaceMask;

/// Locomotion tunables for the player motor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorConfig {
    /// Ground speed while walking, in units per second.
    pub walk_speed: f32,
    /// Ground speed while sprinting, in units per second.
    pub sprint_speed: f32,
    /// Rate of speed change toward the target, in units per second squared.
    pub acceleration: f32,
    /// Turn responsiveness; the per-tick slerp factor is `rotation_speed * dt`.
    pub rotation_speed: f32,
    /// Apex height of a jump above the launch point, in units.
    pub jump_height: f32,
    /// Downward acceleration, in units per second squared (negative).
    pub gravity: f32,
    /// Small downward velocity held while grounded so the probe keeps contact.
    pub grounded_gravity: f32,
    /// Radius of the ground-check sphere, in units.
    pub ground_check_radius: f32,
    /// Character capsule height, in units. Drives the probe origin.
    pub capsule_height: f32,
    /// Character capsule radius, in units. Drives the probe origin.
    pub capsule_radius: f32,
    /// Surface layers the ground probe tests against.
    pub ground_mask: SurfaceMask,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            walk_speed: 4.0,
            sprint_speed: 7.0,
            acceleration: 20.0,
            rotation_speed: 12.0,
            jump_height: 1.4,
            gravity: -20.0,
            grounded_gravity: -2.0,
            ground_check_radius: 0.25,
            capsule_height: 1.8,
            capsule_radius: 0.3,
            ground_mask: SurfaceMask::ALL,
        }
    }
}

impl MotorConfig {
    /// Check the invariants the motor relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.walk_speed < 0.0 || self.sprint_speed < 0.0 {
            return Err(ConfigError::Invalid("speeds must be non-negative"));
        }
        if self.acceleration <= 0.0 {
            return Err(ConfigError::Invalid("acceleration must be positive"));
        }
        if self.rotation_speed < 0.0 {
            return Err(ConfigError::Invalid("rotation_speed must be non-negative"));
        }
        if self.jump_height < 0.0 {
            return Err(ConfigError::Invalid("jump_height must be non-negative"));
        }
        if self.gravity >= 0.0 {
            return Err(ConfigError::Invalid("gravity must be negative"));
        }
        if self.grounded_gravity >= 0.0 {
            return Err(ConfigError::Invalid("grounded_gravity must be negative"));
        }
        if self.ground_check_radius <= 0.0 {
            return Err(ConfigError::Invalid("ground_check_radius must be positive"));
        }
        if self.capsule_radius <= 0.0 || self.capsule_height < 2.0 * self.capsule_radius {
            return Err(ConfigError::Invalid(
                "capsule height must be at least twice its radius",
            ));
        }
        Ok(())
    }
}

/// Orbit camera tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Horizontal look sensitivity, in degrees per second at full deflection.
    pub yaw_sensitivity: f32,
    /// Vertical look sensitivity, in degrees per second at full deflection.
    pub pitch_sensitivity: f32,
    /// Lowest allowed pitch, in degrees (negative looks up past horizontal).
    pub min_pitch: f32,
    /// Highest allowed pitch, in degrees.
    pub max_pitch: f32,
    /// Closest allowed boom distance, in units.
    pub min_distance: f32,
    /// Farthest allowed boom distance, in units.
    pub max_distance: f32,
    /// Boom distance on startup, in units.
    pub default_distance: f32,
    /// Distance change in units per second per unit of zoom input.
    pub zoom_speed: f32,
    /// Height of the orbit pivot above the follow target, in units.
    pub pivot_height: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            yaw_sensitivity: 180.0,
            pitch_sensitivity: 120.0,
            min_pitch: -35.0,
            max_pitch: 65.0,
            min_distance: 2.0,
            max_distance: 6.5,
            default_distance: 4.0,
            zoom_speed: 4.0,
            pivot_height: 1.5,
        }
    }
}

impl OrbitConfig {
    /// Check the invariants the orbit rig relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_pitch > self.max_pitch {
            return Err(ConfigError::Invalid("min_pitch must not exceed max_pitch"));
        }
        if self.min_distance <= 0.0 {
            return Err(ConfigError::Invalid("min_distance must be positive"));
        }
        if self.min_distance > self.max_distance {
            return Err(ConfigError::Invalid(
                "min_distance must not exceed max_distance",
            ));
        }
        if self.default_distance < self.min_distance
            || self.default_distance > self.max_distance
        {
            return Err(ConfigError::Invalid(
                "default_distance must lie within the distance bounds",
            ));
        }
        if self.zoom_speed < 0.0 {
            return Err(ConfigError::Invalid("zoom_speed must be non-negative"));
        }
        Ok(())
    }
}

/// Combined configuration for a third-person control setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub motor: MotorConfig,
    pub orbit: OrbitConfig,
}

impl ControlConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save this configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motor.validate()?;
        self.orbit.validate()?;
        Ok(())
    }
}

/// Errors from loading, saving, or validating configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "config JSON error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
