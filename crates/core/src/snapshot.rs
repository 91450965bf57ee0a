//! Read-only view of a session for renderers.
//!
//! A snapshot is a plain `Copy` value, so handing one to a renderer can never
//! mutate the session it came from.

use crate::piece::ActivePiece;
use crate::types::{Cell, GamePhase, BOARD_COLS, BOARD_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLS as usize]; BOARD_ROWS as usize],
    /// `None` once the game is over
    pub active: Option<ActivePiece>,
    pub score: u32,
    pub phase: GamePhase,
    pub lines: u32,
    pub pieces_locked: u32,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLS as usize]; BOARD_ROWS as usize],
            active: None,
            score: 0,
            phase: GamePhase::Running,
            lines: 0,
            pieces_locked: 0,
        }
    }
}
