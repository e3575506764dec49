//! RNG module - next-tile generation
//!
//! New tiles are 2, 4 or 8, drawn independently each time from a weighted
//! die. With the default weights (6/3/1) this is a ten-sided die where faces
//! 0-5 give a 2, faces 6-8 give a 4 and face 9 gives an 8.
//!
//! Also provides a simple LCG so a seed fully determines a game.

use crate::config::SpawnWeights;
use crate::types::Cell;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG cycle with
    /// short periods (bit 0 simply alternates).
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Weighted source of spawn values
#[derive(Debug, Clone)]
pub struct TileSource {
    rng: SimpleRng,
    weights: SpawnWeights,
}

impl TileSource {
    pub fn new(seed: u32, weights: SpawnWeights) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            weights,
        }
    }

    /// Draw the next spawn value.
    pub fn draw(&mut self) -> Cell {
        let roll = self.rng.next_range(self.weights.total());
        value_for_roll(&self.weights, roll)
    }

    pub fn weights(&self) -> SpawnWeights {
        self.weights
    }

    /// Current RNG state
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

/// Map a die face in `[0, weights.total())` to a tile value.
pub fn value_for_roll(weights: &SpawnWeights, roll: u32) -> Cell {
    if roll < weights.two {
        2
    } else if roll < weights.two + weights.four {
        4
    } else {
        8
    }
}
