//! Game configuration
//!
//! Every tunable constant lives here so a page (LocalStorage) or a native run
//! (JSON file) can override it without touching the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Board ===
    pub board_width: f32,
    pub board_height: f32,

    // === Entities ===
    pub avatar_width: f32,
    pub avatar_height: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub pipe_base_y: f32,

    // === Physics ===
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Added to every pipe's x every frame
    pub pipe_velocity_x: f32,
    /// Jump sets vertical velocity to `-jump_impulse`
    pub jump_impulse: f32,

    // === Spawning ===
    pub opening_space: f32,
    pub spawn_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,

            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_base_y: PIPE_BASE_Y,

            gravity: GRAVITY,
            pipe_velocity_x: PIPE_VELOCITY_X,
            jump_impulse: JUMP_IMPULSE,

            opening_space: OPENING_SPACE,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("avatar_width", self.avatar_width),
            ("avatar_height", self.avatar_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        if self.avatar_height >= self.board_height {
            return Err(ConfigError::Invalid {
                field: "avatar_height",
                reason: "must be smaller than the board height",
            });
        }
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "gravity",
                reason: "must be zero or positive",
            });
        }
        if !(self.pipe_velocity_x.is_finite() && self.pipe_velocity_x < 0.0) {
            return Err(ConfigError::Invalid {
                field: "pipe_velocity_x",
                reason: "must be negative (pipes travel left)",
            });
        }
        if !(self.jump_impulse.is_finite() && self.jump_impulse >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "jump_impulse",
                reason: "must be zero or positive",
            });
        }
        if !(self.opening_space.is_finite() && self.opening_space >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "opening_space",
                reason: "must be zero or positive",
            });
        }
        if !self.pipe_base_y.is_finite() {
            return Err(ConfigError::Invalid {
                field: "pipe_base_y",
                reason: "must be finite",
            });
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "spawn_interval_ms",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Starting position of the avatar (an eighth in from the left, vertically centred)
    pub fn avatar_start(&self) -> Vec2 {
        Vec2::new(
            (self.board_width - self.avatar_width) / 8.0,
            (self.board_height - self.avatar_height) / 2.0,
        )
    }

    pub fn avatar_size(&self) -> Vec2 {
        Vec2::new(self.avatar_width, self.avatar_height)
    }

    pub fn pipe_size(&self) -> Vec2 {
        Vec2::new(self.pipe_width, self.pipe_height)
    }

    /// Apply an optional JSON override on top of the defaults
    pub fn from_override(json: Option<&str>) -> Result<Self, ConfigError> {
        match json {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "flappy_config";

    /// Environment variable naming a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    const CONFIG_ENV: &'static str = "FLAPPY_CONFIG";

    /// Load config overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok())
            .flatten();

        match stored.as_deref() {
            Some(_) => log::info!("Loading config overrides from LocalStorage"),
            None => log::info!("Using default config"),
        }
        Self::from_override(stored.as_deref())
    }

    /// Load config from the file named by `FLAPPY_CONFIG`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        let Ok(path) = std::env::var(Self::CONFIG_ENV) else {
            log::info!("Using default config");
            return Ok(Self::default());
        };

        let json = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
        let config = Self::from_override(Some(&json))?;
        log::info!("Loaded config from {}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_avatar_start() {
        let config = GameConfig::default();
        let start = config.avatar_start();
        assert!((start.x - 40.75).abs() < 1e-4);
        assert!((start.y - 308.0).abs() < 1e-4);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = GameConfig::from_json(r#"{ "gravity": 0.25, "opening_space": 120 }"#)
            .expect("valid config");
        assert_eq!(config.gravity, 0.25);
        assert_eq!(config.opening_space, 120.0);
        // Untouched fields keep defaults
        assert_eq!(config.board_width, BOARD_WIDTH);
        assert_eq!(config.spawn_interval_ms, SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = GameConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let err = GameConfig::from_json(r#"{ "pipe_velocity_x": 2.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "pipe_velocity_x", .. }
        ));

        let err = GameConfig::from_json(r#"{ "board_width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "board_width", .. }));

        let err = GameConfig::from_json(r#"{ "spawn_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "spawn_interval_ms", .. }
        ));
    }

    #[test]
    fn test_override_absent_or_malformed() {
        assert_eq!(
            GameConfig::from_override(None).expect("defaults"),
            GameConfig::default()
        );

        let config = GameConfig::from_override(Some(r#"{ "jump_impulse": 7.5 }"#))
            .expect("valid override");
        assert_eq!(config.jump_impulse, 7.5);

        // A broken stored override is reported, not silently dropped
        assert!(matches!(
            GameConfig::from_override(Some("{ gravity: ")),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_override(Some(r#"{ "gravity": -1 }"#)),
            Err(ConfigError::Invalid { field: "gravity", .. })
        ));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }
}
