//! Collision module - the single legality predicate for placements
//!
//! Every move, rotation and fall step is validated here before it is applied.

use crate::board::Board;
use crate::shape::Shape;
use crate::types::{BOARD_COLS, BOARD_ROWS};

/// Check whether `shape` placed with its top-left at (x, y) fits on `board`.
///
/// A placement is rejected when any occupied cell is left of column 0, right
/// of the last column, below the floor, or on a settled cell. Cells above the
/// visible board (y < 0) are only checked against the side walls.
pub fn fits(shape: &Shape, x: i8, y: i8, board: &Board) -> bool {
    shape.filled_cells().all(|(dy, dx)| {
        let col = x as i16 + dx as i16;
        let row = y as i16 + dy as i16;
        if col < 0 || col >= BOARD_COLS as i16 || row >= BOARD_ROWS as i16 {
            return false;
        }
        row < 0 || !board.is_occupied(col as i8, row as i8)
    })
}
