//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the scheduler, the terminal view and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 1000 | Automatic fall tick |
//! | `RENDER_FPS` | 60 | Display cadence (~16.7ms per frame) |
//!
//! # Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LOCK_BONUS` | 10 | Awarded for every locked piece |
//! | `LINE_CLEAR_BONUS` | 100 | Awarded for every cleared row |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(BOARD_COLS as usize * BOARD_ROWS as usize, 200);
//! assert_eq!(PieceKind::Fork.index(), PieceKind::ALL.len() - 1);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_COLS: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Largest extent (rows or columns) of any catalog shape in any orientation.
pub const MAX_SHAPE_EXTENT: usize = 5;

/// Default automatic fall interval (1000ms = one row per second)
pub const FALL_INTERVAL_MS: u64 = 1000;

/// Default render cadence in frames per second
pub const RENDER_FPS: u32 = 60;

/// Score awarded each time a piece locks
pub const LOCK_BONUS: u32 = 10;

/// Score awarded per cleared row
pub const LINE_CLEAR_BONUS: u32 = 100;

/// 24-bit RGB color.
///
/// Settled board cells carry the color of the piece that locked there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Settled cell, filled with the locking piece's color
pub type Cell = Option<Rgb>;

/// The eight catalog piece kinds
///
/// Seven classic tetrominoes plus `Fork`, a five-row irregular piece:
/// a vertical bar standing on two split feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    L,
    J,
    O,
    S,
    Z,
    Fork,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 8] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::Fork,
    ];

    /// Position of this kind in the catalog.
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::T => 1,
            PieceKind::L => 2,
            PieceKind::J => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
            PieceKind::Fork => 7,
        }
    }
}

/// Discrete intents accepted by the game session.
///
/// Produced by the input collaborator; anything that does not map to one of
/// these is ignored before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Start a fresh game after game over
    Reset,
}

/// Lifecycle phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Running,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_indices_follow_all_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn phase_defaults_to_running() {
        assert_eq!(GamePhase::default(), GamePhase::Running);
    }

    #[test]
    fn default_timing_and_scoring() {
        assert_eq!(FALL_INTERVAL_MS, 1000);
        assert_eq!(RENDER_FPS, 60);
        assert_eq!(LOCK_BONUS, 10);
        assert_eq!(LINE_CLEAR_BONUS, 100);
    }
}
