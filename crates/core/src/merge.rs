//! Merge module - resolves a landing into a stable grid
//!
//! One call to [`resolve`] repeats the following cycle until a cycle merges
//! nothing:
//!
//! 1. Horizontal pass: rows top to bottom, each row left to right. Equal
//!    neighbors `(r, c)`/`(r, c + 1)` merge into `(r, c)`. The sweep is a single
//!    pass, so a merge result is not compared again until the next cycle.
//! 2. Vertical pass: rows top to bottom (all but the last), columns left to
//!    right. Equal neighbors `(r, c)`/`(r + 1, c)` merge into the lower cell.
//! 3. Gravity: every column is compacted downward, keeping tile order.
//!
//! Gravity runs in every cycle, so a vertical merge can bring tiles into
//! horizontal contact for the next cycle and the other way around.
//!
//! Every merge adds the value it produces to the score delta.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::grid::Grid;
use crate::types::{Cell, EMPTY, MAX_GRID_DIM};

/// Outcome of a full resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Points earned (sum of all merge results)
    pub score_delta: u32,
    /// Number of individual merges
    pub merges: u32,
    /// Number of merge + gravity cycles run, including the final quiet one
    pub rounds: u32,
}

/// Resolve a landing and return the score delta.
pub fn resolve(grid: &mut Grid) -> u32 {
    resolve_detailed(grid).score_delta
}

/// Resolve a landing, reporting merge statistics.
///
/// Stops after the first cycle that merges nothing; that cycle's gravity step
/// still runs. A grid that was settled before the landing ends settled.
pub fn resolve_detailed(grid: &mut Grid) -> Resolution {
    let mut out = Resolution::default();

    loop {
        out.rounds += 1;

        let (h_merges, h_score) = merge_horizontal(grid);
        let (v_merges, v_score) = merge_vertical(grid);
        apply_gravity(grid);

        let merges = h_merges + v_merges;
        out.merges += merges;
        out.score_delta = out
            .score_delta
            .saturating_add(h_score)
            .saturating_add(v_score);

        if merges == 0 {
            break;
        }
    }

    debug!(
        merges = out.merges,
        rounds = out.rounds,
        score_delta = out.score_delta,
        "grid resolved"
    );
    out
}

/// Single left-to-right sweep per row. Returns `(merges, score)`.
fn merge_horizontal(grid: &mut Grid) -> (u32, u32) {
    let mut merges = 0u32;
    let mut score = 0u32;

    for row in 0..grid.height() {
        for col in 0..grid.width().saturating_sub(1) {
            let v = grid.cell(row, col);
            if v != EMPTY && v == grid.cell(row, col + 1) {
                let merged = v.saturating_mul(2);
                grid.put(row, col, merged);
                grid.put(row, col + 1, EMPTY);
                score = score.saturating_add(merged);
                merges += 1;
            }
        }
    }

    (merges, score)
}

/// Top-to-bottom sweep; the merged value lands in the lower cell.
///
/// Because the lower cell is compared against the row beneath it on the next
/// iteration, a stack such as `2, 2, 4` collapses to `8` within one sweep.
fn merge_vertical(grid: &mut Grid) -> (u32, u32) {
    let mut merges = 0u32;
    let mut score = 0u32;

    for row in 0..grid.height().saturating_sub(1) {
        for col in 0..grid.width() {
            let v = grid.cell(row, col);
            if v != EMPTY && v == grid.cell(row + 1, col) {
                let merged = v.saturating_mul(2);
                grid.put(row + 1, col, merged);
                grid.put(row, col, EMPTY);
                score = score.saturating_add(merged);
                merges += 1;
            }
        }
    }

    (merges, score)
}

/// Compact every column downward, preserving top-to-bottom order.
///
/// Uses a stack buffer per column (no allocation). Returns whether any tile
/// moved.
pub fn apply_gravity(grid: &mut Grid) -> bool {
    let height = grid.height();
    let mut moved = false;

    for col in 0..grid.width() {
        let mut stack: ArrayVec<Cell, MAX_GRID_DIM> = ArrayVec::new();
        // Bottom to top, so stack[0] is the lowest tile.
        for row in (0..height).rev() {
            let v = grid.cell(row, col);
            if v != EMPTY {
                stack.push(v);
            }
        }

        for row in (0..height).rev() {
            let from_bottom = height - 1 - row;
            let v = stack.get(from_bottom).copied().unwrap_or(EMPTY);
            if grid.cell(row, col) != v {
                grid.put(row, col, v);
                moved = true;
            }
        }
    }

    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_pair_merges_left() {
        let mut grid = Grid::from_rows(&[&[0, 0, 0], &[2, 2, 0]]);
        let (merges, score) = merge_horizontal(&mut grid);
        assert_eq!((merges, score), (1, 4));
        assert_eq!(grid.to_rows(), vec![vec![0, 0, 0], vec![4, 0, 0]]);
    }

    #[test]
    fn test_horizontal_sweep_does_not_cascade() {
        // 4 2 2 -> 4 4 0 in one sweep, not 8.
        let mut grid = Grid::from_rows(&[&[4, 2, 2]]);
        let (merges, score) = merge_horizontal(&mut grid);
        assert_eq!((merges, score), (1, 4));
        assert_eq!(grid.to_rows(), vec![vec![4, 4, 0]]);
    }

    #[test]
    fn test_horizontal_four_in_a_row_makes_two_pairs() {
        let mut grid = Grid::from_rows(&[&[2, 2, 2, 2]]);
        let (merges, score) = merge_horizontal(&mut grid);
        assert_eq!((merges, score), (2, 8));
        assert_eq!(grid.to_rows(), vec![vec![4, 0, 4, 0]]);
    }

    #[test]
    fn test_horizontal_odd_run_leaves_the_right_tile() {
        let mut grid = Grid::from_rows(&[&[2, 2, 2]]);
        merge_horizontal(&mut grid);
        assert_eq!(grid.to_rows(), vec![vec![4, 0, 2]]);
    }

    #[test]
    fn test_vertical_result_lands_in_lower_cell() {
        let mut grid = Grid::from_rows(&[&[8], &[8], &[0]]);
        let (merges, score) = merge_vertical(&mut grid);
        assert_eq!((merges, score), (1, 16));
        assert_eq!(grid.to_rows(), vec![vec![0], vec![16], vec![0]]);
    }

    #[test]
    fn test_vertical_sweep_carries_result_downward() {
        let mut grid = Grid::from_rows(&[&[2], &[2], &[4]]);
        let (merges, score) = merge_vertical(&mut grid);
        assert_eq!((merges, score), (2, 12));
        assert_eq!(grid.to_rows(), vec![vec![0], vec![0], vec![8]]);
    }

    #[test]
    fn test_gravity_keeps_order() {
        let mut grid = Grid::from_rows(&[&[2, 0], &[0, 8], &[4, 0], &[0, 0]]);
        apply_gravity(&mut grid);
        assert_eq!(
            grid.to_rows(),
            vec![vec![0, 0], vec![0, 0], vec![2, 0], vec![4, 8]]
        );
    }

    #[test]
    fn test_resolve_chain_reaction() {
        // Landing a 2 on a 2 makes a 4 that drops next to another 4.
        let mut grid = Grid::from_rows(&[&[0, 0], &[2, 0], &[2, 4]]);
        let res = resolve_detailed(&mut grid);

        // Round 1: vertical 2+2 -> 4 at (2,0). Round 2: horizontal 4+4 -> 8.
        assert_eq!(res.score_delta, 4 + 8);
        assert_eq!(res.merges, 2);
        assert_eq!(res.rounds, 3);
        assert_eq!(grid.to_rows(), vec![vec![0, 0], vec![0, 0], vec![8, 0]]);
    }

    #[test]
    fn test_resolve_settles_floating_tiles_without_merges() {
        let mut grid = Grid::from_rows(&[&[2], &[0], &[4]]);
        let res = resolve_detailed(&mut grid);
        assert_eq!(res, Resolution { score_delta: 0, merges: 0, rounds: 1 });
        assert_eq!(grid.to_rows(), vec![vec![0], vec![2], vec![4]]);
    }

    #[test]
    fn test_resolve_stops_after_first_quiet_cycle() {
        // The quiet cycle's gravity brings the 2s together; they are not
        // merged until the next landing.
        let mut grid = Grid::from_rows(&[&[2], &[0], &[2]]);
        let res = resolve_detailed(&mut grid);
        assert_eq!(res, Resolution { score_delta: 0, merges: 0, rounds: 1 });
        assert_eq!(grid.to_rows(), vec![vec![0], vec![2], vec![2]]);
    }

    #[test]
    fn test_gravity_reports_movement() {
        let mut grid = Grid::from_rows(&[&[2], &[0]]);
        assert!(apply_gravity(&mut grid));
        assert!(!apply_gravity(&mut grid));
    }

    #[test]
    fn test_resolve_empty_grid_is_noop() {
        let mut grid = Grid::new(6, 7);
        assert_eq!(resolve(&mut grid), 0);
        assert_eq!(grid, Grid::new(6, 7));
    }
}
