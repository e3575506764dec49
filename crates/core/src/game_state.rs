//! Game state module - the controller
//!
//! Owns the grid, score, level, falling tile and next tile, and moves between
//! phases:
//!
//! ```text
//! Ready --start--> Falling --blocked below--> (land) --> SpawnDelay --> Falling
//!                     ^                                       |
//!                     +----------- spawn (cell free) ---------+
//!                                  spawn (cell taken) --> GameOver
//! ```
//!
//! Spawning and landing are instantaneous; they happen inside the call that
//! triggers them. `Reset` rebuilds everything from the config and is accepted
//! in every phase, which also drops any pending spawn.

use tracing::{info, trace};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::level::{fall_interval_ms, level_for_score};
use crate::merge::resolve_detailed;
use crate::rng::TileSource;
use crate::snapshot::{FallingSnapshot, GameSnapshot};
use crate::types::{Cell, GameAction};

/// The tile currently falling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingTile {
    pub value: Cell,
    pub row: usize,
    pub col: usize,
}

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed but not started
    Ready,
    /// A tile is falling and accepts input
    Falling,
    /// A tile just landed; the next spawn happens when the countdown hits zero
    SpawnDelay { remaining_ms: u32 },
    /// The spawn cell was taken; only `Reset` leaves this phase
    GameOver,
}

/// Summary of the most recent landing (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingEvent {
    /// Where the tile was written before merging
    pub row: usize,
    pub col: usize,
    pub value: Cell,
    pub score_delta: u32,
    pub merges: u32,
    pub level_up: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    tiles: TileSource,
    phase: Phase,
    falling: Option<FallingTile>,
    next: Cell,
    score: u32,
    level: u32,
    fall_timer_ms: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    tiles_spawned: u32,
    last_event: Option<LandingEvent>,
}

impl GameState {
    /// Create a new game with the given config and RNG seed.
    ///
    /// # Panics
    ///
    /// If the config fails [`GameConfig::validate`] (grid dimensions, intervals,
    /// level step or all-zero spawn weights). Use [`GameState::try_new`] for
    /// configs that have not been validated.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        assert_valid(&config);
        let grid = Grid::new(config.width, config.height);
        Self::with_grid(config, seed, grid)
    }

    /// Validate the config, then create a game.
    pub fn try_new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    /// Create a game that starts from a prepared grid.
    ///
    /// # Panics
    ///
    /// If the config is invalid or the grid size differs from the config.
    pub fn with_grid(config: GameConfig, seed: u32, grid: Grid) -> Self {
        assert_valid(&config);
        assert_eq!(
            (grid.width(), grid.height()),
            (config.width, config.height),
            "grid size must match the config"
        );

        let mut tiles = TileSource::new(seed, config.spawn_weights);
        let next = tiles.draw();

        Self {
            config,
            grid,
            tiles,
            phase: Phase::Ready,
            falling: None,
            next,
            score: 0,
            level: 1,
            fall_timer_ms: 0,
            episode_id: 0,
            tiles_spawned: 0,
            last_event: None,
        }
    }

    /// Start the game and spawn the first tile
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.spawn_tile();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn falling(&self) -> Option<FallingTile> {
        self.falling
    }

    pub fn next_tile(&self) -> Cell {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tiles_spawned(&self) -> u32 {
        self.tiles_spawned
    }

    /// Current fall interval based on level
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level, &self.config)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clone_from(&self.grid);
        out.falling = self.falling.map(FallingSnapshot::from);
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.game_over = self.game_over();
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.fall_interval_ms = self.fall_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::empty(self.config.width, self.config.height);
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LandingEvent> {
        self.last_event.take()
    }

    /// Promote the next tile to a falling tile at the top of the spawn column.
    ///
    /// Returns false (and ends the game) if the spawn cell is occupied. Does
    /// nothing while a tile is still falling or after game over.
    pub(crate) fn spawn_tile(&mut self) -> bool {
        if self.phase == Phase::GameOver || self.falling.is_some() {
            return false;
        }

        let value = self.next;
        self.next = self.tiles.draw();
        self.tiles_spawned = self.tiles_spawned.wrapping_add(1);
        self.fall_timer_ms = 0;

        let col = self.config.spawn_column();
        if !self.grid.is_open(0, col as i32) {
            self.phase = Phase::GameOver;
            self.falling = None;
            info!(
                score = self.score,
                level = self.level,
                episode = self.episode_id,
                "spawn cell blocked, game over"
            );
            return false;
        }

        trace!(value, col, "tile spawned");
        self.falling = Some(FallingTile { value, row: 0, col });
        self.phase = Phase::Falling;
        true
    }

    /// Run one fall tick: move down a row, or land if blocked.
    ///
    /// Returns false when no tile is falling.
    pub fn fall_step(&mut self) -> bool {
        let Some(tile) = self.falling else {
            return false;
        };
        if self.phase != Phase::Falling {
            return false;
        }

        if self.grid.is_open(tile.row as i32 + 1, tile.col as i32) {
            self.falling = Some(FallingTile {
                row: tile.row + 1,
                ..tile
            });
        } else {
            self.land();
        }
        true
    }

    /// Try to shift the falling tile one column.
    pub(crate) fn try_shift(&mut self, dx: i32) -> bool {
        let Some(tile) = self.falling else {
            return false;
        };

        let col = tile.col as i32 + dx;
        if !self.grid.is_open(tile.row as i32, col) {
            return false;
        }

        self.falling = Some(FallingTile {
            col: col as usize,
            ..tile
        });
        true
    }

    /// Drop the falling tile until blocked, then land it.
    pub(crate) fn hard_drop(&mut self) -> bool {
        let Some(mut tile) = self.falling else {
            return false;
        };

        while self.grid.is_open(tile.row as i32 + 1, tile.col as i32) {
            tile.row += 1;
        }
        self.falling = Some(tile);
        self.land();
        true
    }

    /// Write the falling tile into the grid, resolve merges and schedule the
    /// next spawn.
    fn land(&mut self) {
        let Some(tile) = self.falling.take() else {
            return;
        };

        self.grid.put(tile.row, tile.col, tile.value);
        let res = resolve_detailed(&mut self.grid);
        self.score = self.score.saturating_add(res.score_delta);

        let level = level_for_score(self.score, self.config.level_score_step);
        let level_up = level > self.level;
        if level_up {
            self.level = level;
            info!(
                level,
                fall_interval_ms = self.fall_interval_ms(),
                "level up"
            );
        }

        self.last_event = Some(LandingEvent {
            row: tile.row,
            col: tile.col,
            value: tile.value,
            score_delta: res.score_delta,
            merges: res.merges,
            level_up,
        });
        self.fall_timer_ms = 0;

        if self.config.spawn_delay_ms == 0 {
            self.spawn_tile();
        } else {
            self.phase = Phase::SpawnDelay {
                remaining_ms: self.config.spawn_delay_ms,
            };
        }
    }

    /// Reinitialize grid, score and level; the tile sequence continues from
    /// the current RNG state.
    pub fn reset(&mut self) {
        let seed = self.tiles.seed();
        let next_episode = self.episode_id.wrapping_add(1);
        info!(
            score = self.score,
            level = self.level,
            episode = next_episode,
            "game reset"
        );

        let grid = Grid::new(self.config.width, self.config.height);
        *self = Self::with_grid(self.config.clone(), seed, grid);
        self.episode_id = next_episode;
        self.start();
    }

    /// Advance timers by `elapsed_ms`.
    ///
    /// Returns true if the visible state changed (a fall step or a spawn).
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.phase {
            Phase::Ready | Phase::GameOver => false,
            Phase::SpawnDelay { remaining_ms } => {
                if elapsed_ms >= remaining_ms {
                    self.spawn_tile();
                    true
                } else {
                    self.phase = Phase::SpawnDelay {
                        remaining_ms: remaining_ms - elapsed_ms,
                    };
                    false
                }
            }
            Phase::Falling => {
                self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
                if self.fall_timer_ms >= self.fall_interval_ms() {
                    self.fall_timer_ms = 0;
                    return self.fall_step();
                }
                false
            }
        }
    }

    /// Apply a player command.
    ///
    /// Movement and drops only act while a tile is falling; `Reset` always
    /// acts. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action == GameAction::Reset {
            self.reset();
            return true;
        }
        if self.phase != Phase::Falling {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_shift(-1),
            GameAction::MoveRight => self.try_shift(1),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Reset => unreachable!("handled above"),
        }
    }
}

fn assert_valid(config: &GameConfig) {
    if let Err(err) = config.validate() {
        panic!("invalid game config: {err}");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
