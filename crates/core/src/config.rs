//! Game configuration - construction-time tunables
//!
//! Everything here is fixed once a [`GameState`](crate::GameState) is built;
//! a reset keeps the same config. Configs can be loaded from JSON, where any
//! missing field takes its default:
//!
//! ```
//! use falling_2048_core::GameConfig;
//!
//! let cfg = GameConfig::from_json_str(r#"{ "width": 8, "spawn_delay_ms": 0 }"#).unwrap();
//! assert_eq!(cfg.width, 8);
//! assert_eq!(cfg.height, 7);
//! assert_eq!(cfg.spawn_delay_ms, 0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    BASE_FALL_MS, FALL_FLOOR_MS, FALL_STEP_MS, GRID_HEIGHT, GRID_WIDTH, LEVEL_SCORE_STEP,
    MAX_GRID_DIM, SPAWN_DELAY_MS,
};

/// Relative odds of each spawn value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnWeights {
    pub two: u32,
    pub four: u32,
    pub eight: u32,
}

impl SpawnWeights {
    pub fn total(&self) -> u32 {
        self.two.saturating_add(self.four).saturating_add(self.eight)
    }
}

impl Default for SpawnWeights {
    fn default() -> Self {
        Self {
            two: 6,
            four: 3,
            eight: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    /// Fall interval at level 1
    pub base_fall_ms: u32,
    /// Fastest fall interval
    pub fall_floor_ms: u32,
    /// Interval removed per level above 1
    pub fall_step_ms: u32,
    /// Pause between landing and the next spawn (0 spawns immediately)
    pub spawn_delay_ms: u32,
    /// Points per level
    pub level_score_step: u32,
    pub spawn_weights: SpawnWeights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH as usize,
            height: GRID_HEIGHT as usize,
            base_fall_ms: BASE_FALL_MS,
            fall_floor_ms: FALL_FLOOR_MS,
            fall_step_ms: FALL_STEP_MS,
            spawn_delay_ms: SPAWN_DELAY_MS,
            level_score_step: LEVEL_SCORE_STEP,
            spawn_weights: SpawnWeights::default(),
        }
    }
}

impl GameConfig {
    /// Default rules with no landing pause, for tests and headless drivers.
    pub fn headless() -> Self {
        Self {
            spawn_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Column where new tiles appear.
    pub fn spawn_column(&self) -> usize {
        self.width / 2
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = 1..=MAX_GRID_DIM;
        if !dims.contains(&self.width) || !dims.contains(&self.height) {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
                max: MAX_GRID_DIM,
            });
        }
        if self.base_fall_ms == 0 || self.fall_floor_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.fall_floor_ms > self.base_fall_ms {
            return Err(ConfigError::FloorAboveBase {
                floor_ms: self.fall_floor_ms,
                base_ms: self.base_fall_ms,
            });
        }
        if self.level_score_step == 0 {
            return Err(ConfigError::ZeroLevelStep);
        }
        if self.spawn_weights.total() == 0 {
            return Err(ConfigError::EmptyWeights);
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.spawn_column(), 3);
        assert_eq!(cfg.spawn_weights.total(), 10);
    }

    #[test]
    fn test_headless_only_drops_the_delay() {
        let cfg = GameConfig::headless();
        assert_eq!(cfg.spawn_delay_ms, 0);
        assert_eq!(
            GameConfig {
                spawn_delay_ms: SPAWN_DELAY_MS,
                ..cfg
            },
            GameConfig::default()
        );
    }

    #[test]
    fn test_rejects_oversize_grid() {
        let cfg = GameConfig {
            width: MAX_GRID_DIM + 1,
            ..GameConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_floor_above_base() {
        let cfg = GameConfig {
            fall_floor_ms: 900,
            ..GameConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::FloorAboveBase { .. })
        ));
    }

    #[test]
    fn test_rejects_all_zero_weights() {
        let cfg = GameConfig {
            spawn_weights: SpawnWeights {
                two: 0,
                four: 0,
                eight: 0,
            },
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyWeights)));
    }

    #[test]
    fn test_partial_weights_fill_defaults() {
        let cfg = GameConfig::from_json_str(r#"{ "spawn_weights": { "eight": 5 } }"#).unwrap();
        assert_eq!(
            cfg.spawn_weights,
            SpawnWeights {
                two: 6,
                four: 3,
                eight: 5
            }
        );
    }

    #[test]
    fn test_bad_json_is_a_parse_error() {
        assert!(matches!(
            GameConfig::from_json_str("{ width: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values_in_json_are_rejected() {
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "height": 0 }"#),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }
}
