//! Grid module - storage for the playfield
//!
//! The grid is a `width` x `height` array of [`Cell`] values where `0` is empty
//! and anything else is a tile value. Storage is a flat row-major vector.
//! Coordinates are `(row, col)`: row 0 is the top, col 0 is the left.
//!
//! The grid holds no game rules. Merging and gravity live in [`crate::merge`].

use std::fmt;

use crate::error::OutOfBoundsError;
use crate::types::{is_tile_value, Cell, EMPTY, MAX_GRID_DIM};

/// The playfield, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// If either dimension is zero or above [`MAX_GRID_DIM`]. `GameConfig::validate`
    /// rejects such sizes before a game is built.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            (1..=MAX_GRID_DIM).contains(&width) && (1..=MAX_GRID_DIM).contains(&height),
            "grid dimensions {width}x{height} out of range"
        );
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Build a grid from literal rows, top row first.
    ///
    /// # Panics
    ///
    /// If the rows are ragged or the size is out of range.
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(
            rows.iter().all(|r| r.len() == width),
            "all rows must have the same width"
        );

        let mut grid = Self::new(width, height);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                grid.put(row, col, value);
            }
        }
        grid
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> OutOfBoundsError {
        OutOfBoundsError {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, OutOfBoundsError> {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Set the value at `(row, col)`. Use `0` to clear a cell.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<(), OutOfBoundsError> {
        debug_assert!(
            value == EMPTY || is_tile_value(value),
            "{value} is not a tile value"
        );
        let idx = self
            .index(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Check whether `(row, col)` holds no tile.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, OutOfBoundsError> {
        self.get(row, col).map(|v| v == EMPTY)
    }

    /// Check if a signed position is in bounds and empty.
    ///
    /// Movement checks use this so that stepping off an edge and bumping into a
    /// tile are the same answer.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        matches!(self.is_empty(row as usize, col as usize), Ok(true))
    }

    /// Unchecked read for callers iterating within `width`/`height`.
    #[inline(always)]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Unchecked write for callers iterating within `width`/`height`.
    #[inline(always)]
    pub(crate) fn put(&mut self, row: usize, col: usize, value: Cell) {
        self.cells[row * self.width + col] = value;
    }

    /// Clear every cell.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Values of one column from top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).map(move |row| self.cell(row, col))
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != EMPTY).count()
    }

    /// Sum of all tile values. Merges never change it.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Largest tile on the grid (`0` when empty).
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Copy rows out, top row first.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, &v) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                if v == EMPTY {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{v:>5}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(6, 7);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 5), Some(5));
        assert_eq!(grid.index(1, 0), Some(6));
        assert_eq!(grid.index(6, 5), Some(41));
        assert_eq!(grid.index(7, 0), None);
        assert_eq!(grid.index(0, 6), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new(6, 7);
        grid.set(0, 0, 2).unwrap();
        grid.set(3, 4, 16).unwrap();

        assert_eq!(grid.cells[0], 2);
        assert_eq!(grid.cells[3 * 6 + 4], 16);
    }

    #[test]
    fn test_out_of_bounds_reports_coordinates() {
        let grid = Grid::new(6, 7);
        let err = grid.get(7, 2).unwrap_err();
        assert_eq!(
            err,
            OutOfBoundsError {
                row: 7,
                col: 2,
                width: 6,
                height: 7
            }
        );
        assert_eq!(
            err.to_string(),
            "cell (row 7, col 2) is outside the 6x7 grid"
        );
    }

    #[test]
    fn test_is_open_rejects_negative_and_occupied() {
        let mut grid = Grid::new(6, 7);
        grid.set(2, 2, 4).unwrap();

        assert!(grid.is_open(0, 0));
        assert!(!grid.is_open(-1, 0));
        assert!(!grid.is_open(0, -1));
        assert!(!grid.is_open(2, 2));
        assert!(!grid.is_open(7, 0));
    }

    #[test]
    fn test_column_reads_top_to_bottom() {
        let grid = Grid::from_rows(&[&[2, 0], &[0, 0], &[8, 4]]);
        assert_eq!(grid.column(0).collect::<Vec<_>>(), vec![2, 0, 8]);
        assert_eq!(grid.column(1).collect::<Vec<_>>(), vec![0, 0, 4]);
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let grid = Grid::from_rows(&[&[2, 0]]);
        assert_eq!(grid.to_string(), "    2     .\n");
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        let _ = Grid::new(0, 7);
    }
}
