//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a simple
//! framebuffer ([`GameView`]) which is then flushed to the terminal with
//! run-level diffing ([`TerminalRenderer`]). Nothing here can reach back into
//! the game session; it only ever sees a [`GameSnapshot`](crate::core::GameSnapshot).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
