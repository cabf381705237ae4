//! # Configuration Module
//!
//! Startup settings for the world: terrain height, startup chunk radius,
//! spawn position, and kinematic tuning. Loaded from a JSON file when one
//! is present; every field has a default, so a missing or partial file is
//! not an error, while an unreadable or malformed file is fatal at init
//! and never retried.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::voxels::terrain::DEFAULT_SURFACE_HEIGHT;

/// Fatal configuration problems surfaced at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path of the offending file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file could not be parsed as JSON.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

/// World startup settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// Surface height of the default flat terrain profile.
    pub surface_height: i32,
    /// Chunk radius generated around the origin at startup; radius 2 is a
    /// 5x5 chunk area.
    pub chunk_radius: i32,
    /// Player spawn position (feet), world space.
    pub spawn: [f32; 3],
    /// Horizontal movement speed, blocks per tick.
    pub walk_speed: f32,
    /// Gravity accumulation per tick.
    pub gravity: f32,
    /// Vertical velocity applied by a jump.
    pub jump_impulse: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            surface_height: DEFAULT_SURFACE_HEIGHT,
            chunk_radius: 2,
            spawn: [8.0, DEFAULT_SURFACE_HEIGHT as f32 + 1.0, 8.0],
            walk_speed: crate::physics::WALK_SPEED,
            gravity: crate::physics::GRAVITY_PER_TICK,
            jump_impulse: crate::physics::JUMP_IMPULSE,
        }
    }
}

impl WorldConfig {
    /// Loads settings from a JSON file.
    ///
    /// A missing file yields the defaults; any other failure is fatal.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(WorldConfig::default());
            }
            Err(err) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source: err,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            source: err,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_reference_deployment() {
        let config = WorldConfig::default();
        assert_eq!(config.surface_height, 32);
        assert_eq!(config.chunk_radius, 2);
        assert_eq!(config.spawn[1], 33.0);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config: WorldConfig =
            serde_json::from_str(r#"{ "surface_height": 40, "chunk_radius": 1 }"#).unwrap();
        assert_eq!(config.surface_height, 40);
        assert_eq!(config.chunk_radius, 1);
        assert_eq!(config.spawn, WorldConfig::default().spawn);
        assert_eq!(config.walk_speed, WorldConfig::default().walk_speed);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<WorldConfig, _> =
            serde_json::from_str(r#"{ "surface_heihgt": 40 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = WorldConfig::load(Path::new("/definitely/not/here.json")).unwrap();
        assert_eq!(config.surface_height, WorldConfig::default().surface_height);
    }
}
