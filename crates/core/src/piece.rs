//! Active piece module - the currently falling piece and spawning
//!
//! The active piece owns a copy of its shape. Moves and rotations build a
//! candidate piece, the session checks it with [`fits`](crate::collision::fits)
//! and only then replaces the current one, so a rejected move leaves the piece
//! untouched.

use crate::board::Board;
use crate::catalog;
use crate::collision::fits;
use crate::rng::SimpleRng;
use crate::shape::Shape;
use crate::types::{PieceKind, Rgb, BOARD_COLS};

/// The falling piece: shape, top-left origin and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
}

impl ActivePiece {
    /// Create a piece of `kind` at its spawn position: horizontally centered
    /// on the top row.
    pub fn new(kind: PieceKind) -> Self {
        let shape = catalog::template(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
            color: catalog::color(kind),
        }
    }

    /// Same piece moved by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece at the same origin, shape turned 90° clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_clockwise(),
            ..*self
        }
    }

    /// Check the piece against the board at its current placement
    pub fn fits(&self, board: &Board) -> bool {
        fits(&self.shape, self.x, self.y, board)
    }

    /// Absolute (x, y) board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dy, dx)| (self.x + dx, self.y + dy))
    }
}

/// Leftmost column that centers `shape` on the board
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_COLS / 2) as i8 - (shape.cols() / 2) as i8
}

/// Spawn a uniformly random catalog piece.
///
/// No legality check happens here: a piece may appear on top of settled
/// cells. The session detects that through the post-lock top-row check.
pub fn spawn(rng: &mut SimpleRng) -> ActivePiece {
    ActivePiece::new(rng.next_kind())
}
