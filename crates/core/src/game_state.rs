//! Game state module - the game session and its state machine
//!
//! A [`GameSession`] owns the board, the active piece, the score and the phase.
//! It is driven from outside by two kinds of calls:
//!
//! - [`GameSession::on_fall_tick`], invoked by the fall timer
//! - [`GameSession::apply_action`], invoked for every player intent
//!
//! Each call runs to completion and leaves the session consistent, so a caller
//! that serializes them (the tick scheduler does) gets the lock → clear →
//! spawn → game-over sequence atomically with respect to input.

use log::{debug, info};

use crate::board::Board;
use crate::piece::{spawn, ActivePiece};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GamePhase, LINE_CLEAR_BONUS, LOCK_BONUS};

/// Result of one fall tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOutcome {
    /// Game is over; the tick did nothing
    Idle,
    /// Piece moved down one row
    Moved,
    /// Piece locked, rows were cleared and a new piece spawned
    Locked { lines_cleared: u32 },
    /// Piece locked and the top row is now occupied
    GameOver { final_score: u32 },
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: ActivePiece,
    rng: SimpleRng,
    score: u32,
    phase: GamePhase,
    lines: u32,
    pieces_locked: u32,
}

impl GameSession {
    /// Cold start: fresh board and the first spawned piece
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = spawn(&mut rng);
        info!("game started (seed {}), first piece {:?}", seed, active.kind);
        Self {
            board: Board::new(),
            active,
            rng,
            score: 0,
            phase: GamePhase::Running,
            lines: 0,
            pieces_locked: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for setting up positions in tests and tools
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Replace the active piece, for setting up positions in tests and tools
    pub fn place_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Start a fresh game after game over.
    ///
    /// Returns false (and changes nothing) while the game is still running.
    pub fn reset(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.phase = GamePhase::Running;
        self.spawn_piece();
        info!("game reset");
        true
    }

    /// Automatic fall step
    pub fn on_fall_tick(&mut self) -> FallOutcome {
        if self.game_over() {
            return FallOutcome::Idle;
        }

        if self.try_move(0, 1) {
            return FallOutcome::Moved;
        }

        self.lock_piece();
        let lines_cleared = self.clear_completed_rows();
        self.spawn_piece();

        if self.board.is_top_row_occupied() {
            self.phase = GamePhase::GameOver;
            info!("game over, final score {}", self.score);
            return FallOutcome::GameOver {
                final_score: self.score,
            };
        }

        FallOutcome::Locked { lines_cleared }
    }

    /// Apply a player intent. Returns true if the session changed.
    ///
    /// Movement intents are ignored after game over; `Reset` is ignored
    /// while running.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action == GameAction::Reset {
            return self.reset();
        }
        if self.game_over() {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Reset => false,
        }
    }

    /// Move the active piece if the destination fits; otherwise leave it.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let candidate = self.active.translated(dx, dy);
        if candidate.fits(&self.board) {
            self.active = candidate;
            return true;
        }
        false
    }

    /// Rotate the active piece clockwise in place if the result fits.
    /// No wall kicks are attempted.
    pub fn try_rotate(&mut self) -> bool {
        let candidate = self.active.rotated();
        if candidate.fits(&self.board) {
            self.active = candidate;
            return true;
        }
        false
    }

    /// Commit the active piece's cells to the board (+10).
    ///
    /// The placement must already be legal. The active piece is spent after
    /// this and is replaced by the next [`spawn_piece`](Self::spawn_piece).
    pub fn lock_piece(&mut self) {
        let piece = self.active;
        self.board
            .lock_piece(&piece.shape, piece.x, piece.y, piece.color);
        self.score += LOCK_BONUS;
        self.pieces_locked += 1;
        debug!("locked {:?} at ({}, {})", piece.kind, piece.x, piece.y);
    }

    /// Remove complete rows (+100 each) and return how many were removed
    pub fn clear_completed_rows(&mut self) -> u32 {
        let cleared = self.board.clear_completed_rows();
        let count = cleared.len() as u32;
        if count > 0 {
            self.score += count * LINE_CLEAR_BONUS;
            self.lines += count;
            debug!("cleared rows {:?}", cleared.as_slice());
        }
        count
    }

    /// Replace the active piece with a fresh random one at the spawn position
    pub fn spawn_piece(&mut self) {
        self.active = spawn(&mut self.rng);
        debug!("spawned {:?}", self.active.kind);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = if self.is_running() {
            Some(self.active)
        } else {
            None
        };
        out.score = self.score;
        out.phase = self.phase;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
