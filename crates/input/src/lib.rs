//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`]s and runs a
//! reader thread that feeds them to the tick scheduler as
//! [`Command`](crate::engine::Command)s. Unmapped keys never leave this crate.

pub mod map;
pub mod reader;

pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use map::{handle_key_event, key_to_command, should_quit};
pub use reader::spawn_key_reader;
