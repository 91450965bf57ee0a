//! Board module - manages the grid of settled cells
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of the
//! piece that locked there. Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{Cell, Rgb, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_COLS as usize) * (BOARD_ROWS as usize);

const WIDTH: usize = BOARD_COLS as usize;
const HEIGHT: usize = BOARD_ROWS as usize;

/// Row indices cleared by one pass
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_COLS as i8 || y < 0 || y >= BOARD_ROWS as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_COLS
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Borrow one row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Remove row `y`, shift every row above it down by one and insert an
    /// empty row at the top
    fn remove_row(&mut self, y: usize) {
        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * WIDTH;
            self.cells
                .copy_within(src_start..src_start + WIDTH, row * WIDTH);
        }
        self.cells[..WIDTH].fill(None);
    }

    /// Clear all complete rows, returning their indices in scan order.
    ///
    /// Rows are scanned top to bottom. A cleared row at `y` pulls rows
    /// `0..y` down by one, all of which were already checked, so the scan
    /// never skips a row and the surviving rows keep their relative order.
    pub fn clear_completed_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for y in 0..HEIGHT {
            if self.is_row_complete(y) {
                self.remove_row(y);
                cleared.push(y);
            }
        }
        cleared
    }

    /// Write `color` into every occupied cell of `shape` placed at (x, y).
    ///
    /// Every occupied cell of the placement must lie inside the grid. Callers
    /// lock only placements that `fits` accepted or a spawn position.
    pub fn lock_piece(&mut self, shape: &Shape, x: i8, y: i8, color: Rgb) {
        for (dy, dx) in shape.filled_cells() {
            let written = self.set(x + dx, y + dy, Some(color));
            debug_assert!(written, "locked cell ({}, {}) out of bounds", x + dx, y + dy);
        }
    }

    /// Game-over predicate: any settled cell in the top row
    pub fn is_top_row_occupied(&self) -> bool {
        self.row(0).iter().any(|cell| cell.is_some())
    }

    /// Number of settled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Copy the board into a row-major 2D grid
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Copy the board out as rows, for tests and debugging
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        (0..HEIGHT).map(|y| self.row(y).to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_COLS as i8 {
            board.set(x, y, Some(RED));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_clear_adjacent_complete_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 18);
        fill_row(&mut board, 19);
        board.set(4, 17, Some(RED));

        let cleared = board.clear_completed_rows();
        assert_eq!(cleared.as_slice(), &[18, 19]);
        assert_eq!(board.get(4, 19), Some(Some(RED)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_clear_split_complete_rows_keeps_order() {
        let mut board = Board::new();
        fill_row(&mut board, 15);
        fill_row(&mut board, 17);
        let blue = Rgb::new(0, 0, 255);
        board.set(1, 14, Some(blue));
        board.set(2, 16, Some(RED));
        board.set(3, 18, Some(blue));

        let cleared = board.clear_completed_rows();
        assert_eq!(cleared.len(), 2);

        // Row 18 untouched, row 16 dropped by one, row 14 dropped by two.
        assert_eq!(board.get(3, 18), Some(Some(blue)));
        assert_eq!(board.get(2, 17), Some(Some(RED)));
        assert_eq!(board.get(1, 16), Some(Some(blue)));
        assert_eq!(board.filled_count(), 3);
    }

    #[test]
    fn test_lock_piece_writes_color() {
        let mut board = Board::new();
        let o = Shape::parse(&["##", "##"]);
        board.lock_piece(&o, 4, 4, RED);
        assert!(board.is_occupied(4, 4));
        assert!(board.is_occupied(5, 4));
        assert!(board.is_occupied(4, 5));
        assert!(board.is_occupied(5, 5));
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of bounds")]
    fn test_lock_outside_grid_violates_precondition() {
        let mut board = Board::new();
        let o = Shape::parse(&["##", "##"]);
        board.lock_piece(&o, 9, 0, RED);
    }

    #[test]
    fn test_to_cells_is_row_major() {
        let mut board = Board::new();
        board.set(3, 5, Some(RED));
        let rows = board.to_cells();
        assert_eq!(rows.len(), HEIGHT);
        assert_eq!(rows[5][3], Some(RED));
        assert_eq!(rows.iter().flatten().filter(|c| c.is_some()).count(), 1);
    }
}
