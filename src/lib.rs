//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces of
//! the terminal frontend that glue them together: logging setup and the
//! frame sink that renders snapshots to the terminal.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod frontend;
pub mod logging;

pub use frontend::TerminalFrontend;
