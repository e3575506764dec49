//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! from the core logic, the terminal front end and tests alike.
//!
//! # Grid Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 6 columns (indexed 0-5)
//! - **Height**: 7 rows (indexed 0-6, row 0 is the top)
//! - **Spawn column**: `width / 2` (column 3 on the default grid), row 0
//!
//! Both are construction-time parameters of the core `GameConfig`; these are
//! only the defaults.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Front-end frame interval (~60 FPS) |
//! | `BASE_FALL_MS` | 600 | Fall interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Interval reduction per level gained |
//! | `FALL_FLOOR_MS` | 200 | Fastest fall interval |
//! | `SPAWN_DELAY_MS` | 300 | Pause between a landing and the next spawn |
//!
//! # Fall Intervals by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 600ms |
//! | 2 | 550ms |
//! | 5 | 400ms |
//! | 9+ | 200ms (floor) |
//!
//! # Examples
//!
//! ```
//! use falling_2048_types::{GameAction, GRID_HEIGHT, GRID_WIDTH};
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//! assert_eq!(action.as_str(), "hardDrop");
//!
//! assert_eq!(GRID_WIDTH, 6);
//! assert_eq!(GRID_HEIGHT, 7);
//! ```

/// Default grid width in cells (6 columns)
pub const GRID_WIDTH: u8 = 6;

/// Default grid height in cells (7 rows)
pub const GRID_HEIGHT: u8 = 7;

/// Largest width or height a grid may be constructed with.
pub const MAX_GRID_DIM: usize = 32;

/// Front-end frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Fall interval at level 1 (600ms per row)
pub const BASE_FALL_MS: u32 = 600;

/// Fall interval reduction for every level above 1
pub const FALL_STEP_MS: u32 = 50;

/// Fastest fall interval the level curve can reach
pub const FALL_FLOOR_MS: u32 = 200;

/// Pause between a tile landing and the next spawn
pub const SPAWN_DELAY_MS: u32 = 300;

/// Points needed per level
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// A cell on the grid
///
/// - `0`: empty
/// - any power of two `>= 2`: a tile with that value
pub type Cell = u32;

/// Value stored in an empty cell
pub const EMPTY: Cell = 0;

/// Returns true if `value` can appear on a tile (a power of two, at least 2).
///
/// # Examples
///
/// ```
/// use falling_2048_types::is_tile_value;
///
/// assert!(is_tile_value(2));
/// assert!(is_tile_value(65536));
/// assert!(!is_tile_value(0));
/// assert!(!is_tile_value(1));
/// assert!(!is_tile_value(6));
/// ```
pub fn is_tile_value(value: Cell) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// Commands the player can issue
///
/// These are the only inputs the controller recognizes. Front ends map their
/// own key events onto them and drop anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the falling tile one column left
    MoveLeft,
    /// Move the falling tile one column right
    MoveRight,
    /// Drop the falling tile until it is blocked, then land it
    HardDrop,
    /// Start a fresh game (valid in any state, including game over)
    Reset,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("RESET"), Some(GameAction::Reset));
    /// assert_eq!(GameAction::from_str("rotateCw"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "harddrop" => Some(GameAction::HardDrop),
            "reset" | "restart" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::HardDrop => "hardDrop",
            GameAction::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_FALL_MS, 600);
        assert_eq!(FALL_STEP_MS, 50);
        assert_eq!(FALL_FLOOR_MS, 200);
        assert_eq!(SPAWN_DELAY_MS, 300);
        assert_eq!(LEVEL_SCORE_STEP, 1000);
    }

    #[test]
    fn action_strings_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::HardDrop,
            GameAction::Reset,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn restart_is_an_alias_for_reset() {
        assert_eq!(GameAction::from_str("restart"), Some(GameAction::Reset));
    }

    #[test]
    fn default_grid_fits_dimension_cap() {
        assert!((GRID_WIDTH as usize) <= MAX_GRID_DIM);
        assert!((GRID_HEIGHT as usize) <= MAX_GRID_DIM);
    }
}
