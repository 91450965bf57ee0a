//! Background key reader.
//!
//! Terminal reads block, so they run on a dedicated thread that forwards
//! mapped commands into the scheduler's channel. The thread never touches the
//! game session.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::debug;
use tokio::sync::mpsc;

use crate::engine::Command;
use crate::map::key_to_command;

/// How long a single poll waits before re-checking whether the loop is gone.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Spawn the reader thread.
///
/// The thread exits after forwarding `Quit`, or once the receiving side of
/// `tx` has been dropped.
pub fn spawn_key_reader(tx: mpsc::Sender<Command>) -> JoinHandle<Result<()>> {
    thread::spawn(move || read_keys(tx))
}

fn read_keys(tx: mpsc::Sender<Command>) -> Result<()> {
    while !tx.is_closed() {
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        let Some(command) = key_to_command(key) else {
            continue;
        };
        if tx.blocking_send(command).is_err() {
            break;
        }
        if command == Command::Quit {
            break;
        }
    }
    debug!("key reader stopped");
    Ok(())
}
