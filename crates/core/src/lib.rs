//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and the session state machine. It has no
//! dependencies on terminals, timers or I/O:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is a plain method call
//! - **Allocation-free**: board, shapes and snapshots are fixed-size values
//!
//! # Module Structure
//!
//! - [`catalog`]: the eight piece templates and their colors
//! - [`shape`]: boolean occupancy matrices and the clockwise rotation
//! - [`board`]: 10x20 grid of settled cells, locking and line clearing
//! - [`collision`]: the `fits` legality predicate
//! - [`piece`]: the active piece and spawning
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: the session state machine (Running / GameOver)
//! - [`snapshot`]: read-only copy of a session for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{FallOutcome, GameSession};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameSession::new(12345);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//! assert_eq!(game.on_fall_tick(), FallOutcome::Moved);
//!
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod catalog;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use collision::fits;
pub use game_state::{FallOutcome, GameSession};
pub use piece::{spawn, ActivePiece};
pub use rng::SimpleRng;
pub use shape::{rotate_clockwise, Shape};
pub use snapshot::GameSnapshot;
