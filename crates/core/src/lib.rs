//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals or I/O, which keeps it:
//!
//! - **Deterministic**: same seed and config produce identical games
//! - **Testable**: every rule is reachable without a rendering surface
//! - **Portable**: runs in the terminal front end, benches or headless drivers
//!
//! # Module Structure
//!
//! - [`grid`]: bounds-checked cell storage (6x7 by default)
//! - [`merge`]: merge + gravity resolution after a landing
//! - [`rng`]: seeded LCG and the weighted next-tile source
//! - [`level`]: level curve and fall interval
//! - [`config`]: construction-time tunables, loadable from JSON
//! - [`game_state`]: the controller (spawn, fall, land, reset)
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! - A tile spawns at the top of the middle column and falls one row per tick
//! - It can be moved left/right into empty cells or hard-dropped
//! - On landing, equal neighbors merge (horizontal then vertical), gravity
//!   compacts each column, and this repeats until nothing merges
//! - Every merge scores the value it produces
//! - The game ends when the spawn cell is already occupied
//!
//! # Example
//!
//! ```
//! use falling_2048_core::{GameConfig, GameState};
//! use falling_2048_types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::headless(), 12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::HardDrop);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.grid.tile_count(), 1);
//! assert!(snap.falling.is_some()); // next tile already spawned
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Headless drivers can call
//! [`GameState::fall_step`](game_state::GameState::fall_step) instead to
//! advance exactly one fall tick.

pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod level;
pub mod merge;
pub mod rng;
pub mod snapshot;

pub use falling_2048_types as types;

// Re-export commonly used types for convenience
pub use config::{GameConfig, SpawnWeights};
pub use error::{ConfigError, OutOfBoundsError};
pub use game_state::{FallingTile, GameState, LandingEvent, Phase};
pub use grid::Grid;
pub use level::{fall_interval_ms, level_for_score};
pub use merge::{apply_gravity, resolve, resolve_detailed, Resolution};
pub use rng::{SimpleRng, TileSource};
pub use snapshot::{FallingSnapshot, GameSnapshot};
