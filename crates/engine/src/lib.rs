//! Engine crate - drives a [`GameSession`](blockfall_core::GameSession) in time.
//!
//! The core crate knows nothing about clocks. This crate owns the two periodic
//! timers (fall and render), the command channel that carries player intents,
//! and the environment-based configuration for both.

pub mod config;
pub mod scheduler;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::{render_interval_for, EngineConfig};
pub use scheduler::{Command, FrameSink, RunSummary, TickScheduler};
