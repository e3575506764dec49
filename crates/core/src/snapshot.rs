//! Snapshot module - read-only game state handed to renderers

use crate::game_state::{FallingTile, Phase};
use crate::grid::Grid;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingSnapshot {
    pub value: Cell,
    pub row: usize,
    pub col: usize,
}

impl From<FallingTile> for FallingSnapshot {
    fn from(value: FallingTile) -> Self {
        Self {
            value: value.value,
            row: value.row,
            col: value.col,
        }
    }
}

/// Everything a renderer needs, detached from the live game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub falling: Option<FallingSnapshot>,
    pub next: Cell,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    pub phase: Phase,
    pub episode_id: u32,
    pub fall_interval_ms: u32,
}

impl GameSnapshot {
    /// A blank snapshot for a grid of the given size.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            falling: None,
            next: 2,
            score: 0,
            level: 1,
            game_over: false,
            phase: Phase::Ready,
            episode_id: 0,
            fall_interval_ms: 0,
        }
    }

    /// Value shown at `(row, col)`, including the falling tile.
    pub fn cell_with_falling(&self, row: usize, col: usize) -> Cell {
        match self.falling {
            Some(f) if f.row == row && f.col == col => f.value,
            _ => self.grid.get(row, col).unwrap_or(0),
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over && self.falling.is_some()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::empty(GRID_WIDTH as usize, GRID_HEIGHT as usize)
    }
}
