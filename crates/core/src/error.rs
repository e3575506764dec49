//! Error types for the core crate.

use thiserror::Error;

/// A grid access outside the declared dimensions.
///
/// The controller never produces one; seeing it means a caller computed a bad
/// coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell (row {row}, col {col}) is outside the {width}x{height} grid")]
pub struct OutOfBoundsError {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

/// Rejected or unreadable game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions {width}x{height} must each be between 1 and {max}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("fall floor {floor_ms}ms is above the base fall interval {base_ms}ms")]
    FloorAboveBase { floor_ms: u32, base_ms: u32 },

    #[error("fall intervals must be non-zero")]
    ZeroInterval,

    #[error("level score step must be non-zero")]
    ZeroLevelStep,

    #[error("spawn weights must not all be zero")]
    EmptyWeights,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
