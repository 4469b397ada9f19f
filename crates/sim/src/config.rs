use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Movement and collision constants for the kinematic body.
///
/// Defaults reproduce the reference walkabout tuning: walking feels slow
/// and deliberate, sprint doubles it, and the jump arc is short.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Walk speed in units per second.
    pub base_speed: f32,
    /// Sprint speed in units per second. Consulted whenever the caller
    /// holds the sprint binding; otherwise `base_speed` applies.
    pub sprint_speed: f32,
    /// Vertical velocity applied on a successful jump.
    pub jump_impulse: f32,
    /// Gravity magnitude in units per second squared.
    pub gravity: f32,
    /// Height of the infinite ground plane the camera rests on.
    pub ground_height: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            base_speed: 2.0,
            sprint_speed: 4.0,
            jump_impulse: 3.0,
            gravity: 9.8,
            ground_height: 0.5,
        }
    }
}

/// Snow field tuning.
///
/// The fall rate is expressed per tick, not per second: the reference
/// behavior decrements by a fixed amount every frame regardless of frame
/// time. `scale_with_dt` opts into frame-rate independence by scaling
/// the decrement against a 60 Hz reference tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowConfig {
    /// Number of flakes in the pool. Fixed for the process lifetime.
    pub count: usize,
    /// Horizontal drift per tick (applied as x -= drift).
    pub drift_per_tick: f32,
    /// Fall per tick (applied as y -= fall).
    pub fall_per_tick: f32,
    /// Flakes spawn with x and z in [-half_extent, half_extent).
    pub spawn_half_extent: f32,
    /// Flakes spawn with y in [height_min, height_max).
    pub spawn_height_min: f32,
    pub spawn_height_max: f32,
    /// Scale the per-tick decrement by dt against a 60 Hz reference tick
    /// instead of applying it once per frame.
    pub scale_with_dt: bool,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            count: 50_000,
            drift_per_tick: 0.01,
            fall_per_tick: 0.06,
            spawn_half_extent: 25.0,
            spawn_height_min: 10.0,
            spawn_height_max: 30.0,
            scale_with_dt: false,
        }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub movement: MovementConfig,
    pub snow: SnowConfig,
}

impl SimConfig {
    /// Load configuration from a YAML file. Missing fields fall back to
    /// the defaults, so a partial file only overrides what it names.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_reference_tuning() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.movement.base_speed, 2.0);
        assert_eq!(cfg.movement.sprint_speed, 4.0);
        assert_eq!(cfg.movement.jump_impulse, 3.0);
        assert_eq!(cfg.movement.gravity, 9.8);
        assert_eq!(cfg.movement.ground_height, 0.5);
        assert_eq!(cfg.snow.count, 50_000);
        assert_eq!(cfg.snow.drift_per_tick, 0.01);
        assert_eq!(cfg.snow.fall_per_tick, 0.06);
        assert!(!cfg.snow.scale_with_dt);
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let cfg: SimConfig = serde_yaml::from_str(
            "movement:\n  base_speed: 5.5\nsnow:\n  count: 100\n",
        )
        .unwrap();
        assert_eq!(cfg.movement.base_speed, 5.5);
        assert_eq!(cfg.movement.gravity, 9.8);
        assert_eq!(cfg.snow.count, 100);
        assert_eq!(cfg.snow.fall_per_tick, 0.06);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "movement:\n  ground_height: 1.25").unwrap();
        let cfg = SimConfig::load(file.path()).unwrap();
        assert_eq!(cfg.movement.ground_height, 1.25);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SimConfig::load("/nonexistent/snowwalk.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_malformed_yaml_is_yaml_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "movement: [not, a, map]").unwrap();
        let err = SimConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
