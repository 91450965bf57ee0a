//! Terminal Blockfall runner (default binary).
//!
//! Wires the key reader, the tick scheduler and the terminal frontend together
//! on a single-threaded tokio runtime.

use anyhow::{anyhow, Result};
use log::info;
use tokio::sync::mpsc;

use blockfall::core::GameSession;
use blockfall::engine::{Command, EngineConfig, RunSummary, TickScheduler};
use blockfall::input::spawn_key_reader;
use blockfall::term::TerminalRenderer;
use blockfall::{logging, TerminalFrontend};

/// Pending intents the reader may queue while a tick is being handled.
const COMMAND_QUEUE: usize = 64;

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    if logging::init(&config)? {
        info!("config: {:?}", config);
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let (result, scores) = rt.block_on(run(&config, &mut term));

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    for (i, score) in scores.iter().enumerate() {
        println!("Game {} over! Your score: {}", i + 1, score);
    }
    println!("Final score: {}", summary.final_score);
    Ok(())
}

async fn run(config: &EngineConfig, term: &mut TerminalRenderer) -> (Result<RunSummary>, Vec<u32>) {
    let (tx, mut rx) = mpsc::channel::<Command>(COMMAND_QUEUE);
    let reader = spawn_key_reader(tx);

    let mut session = GameSession::new(config.seed);
    let mut frontend = TerminalFrontend::new(term);
    let scheduler = TickScheduler::from_config(config);

    let result = scheduler.run(&mut session, &mut rx, &mut frontend).await;
    let scores = frontend.final_scores().to_vec();

    // Closing the channel stops the reader thread.
    drop(rx);
    let joined = reader
        .join()
        .map_err(|_| anyhow!("key reader thread panicked"))
        .and_then(|r| r);

    (result.and_then(|summary| joined.map(|_| summary)), scores)
}
