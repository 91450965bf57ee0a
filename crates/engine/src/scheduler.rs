//! Tick scheduler - the single-threaded event loop driving a session.
//!
//! Three event sources feed one loop:
//!
//! - the fall timer, calling [`GameSession::on_fall_tick`]
//! - the command channel, carrying player intents
//! - the render timer, handing a [`GameSnapshot`] to a [`FrameSink`]
//!
//! Only the loop body touches the session, one event at a time, so a fall
//! tick's lock → clear → spawn → game-over sequence is never interleaved with
//! an intent. The sink only ever sees a snapshot by shared reference.

use std::future;
use std::time::Duration;

use anyhow::Result;
use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::config::EngineConfig;
use crate::core::{FallOutcome, GameSession, GameSnapshot};
use crate::types::GameAction;

/// Message delivered to the loop by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Action(GameAction),
    Quit,
}

/// Presentation collaborator.
///
/// Receives a snapshot on every render tick and the final score when a game
/// ends.
pub trait FrameSink {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    fn game_over(&mut self, _final_score: u32) -> Result<()> {
        Ok(())
    }
}

/// Counters collected over one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub fall_ticks: u64,
    pub frames: u64,
    pub actions_applied: u64,
    pub games_finished: u32,
    pub final_score: u32,
}

/// The fall ticker. Armed while the game runs, cancelled on game over.
struct FallTimer {
    period: Duration,
    interval: Option<Interval>,
}

impl FallTimer {
    fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    /// Arm the timer; the first tick fires one full period from now.
    /// Arming an armed timer is a no-op, so it can never run twice.
    fn start(&mut self) {
        if self.interval.is_some() {
            return;
        }
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn cancel(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Resolves on the next fall tick; never resolves while cancelled.
    async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickScheduler {
    fall_interval: Duration,
    render_interval: Duration,
}

impl TickScheduler {
    pub fn new(fall_interval: Duration, render_interval: Duration) -> Self {
        Self {
            fall_interval,
            render_interval,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.fall_interval, config.render_interval)
    }

    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    pub fn render_interval(&self) -> Duration {
        self.render_interval
    }

    /// Run the loop until a `Quit` command arrives or every sender is dropped.
    ///
    /// Sink errors abort the loop and are returned.
    pub async fn run<S: FrameSink>(
        &self,
        session: &mut GameSession,
        commands: &mut mpsc::Receiver<Command>,
        sink: &mut S,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        let mut fall = FallTimer::new(self.fall_interval);
        if session.is_running() {
            fall.start();
        }

        let mut render = time::interval(self.render_interval);
        render.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "scheduler running: fall every {:?}, frame every {:?}",
            self.fall_interval, self.render_interval
        );

        loop {
            tokio::select! {
                biased;

                _ = fall.tick() => {
                    summary.fall_ticks += 1;
                    match session.on_fall_tick() {
                        FallOutcome::GameOver { final_score } => {
                            fall.cancel();
                            summary.games_finished += 1;
                            summary.final_score = final_score;
                            sink.game_over(final_score)?;
                        }
                        FallOutcome::Locked { lines_cleared } if lines_cleared > 0 => {
                            debug!("{} line(s) cleared, score {}", lines_cleared, session.score());
                        }
                        _ => {}
                    }
                }

                cmd = commands.recv() => {
                    match cmd {
                        Some(Command::Action(action)) => {
                            if session.apply_action(action) {
                                summary.actions_applied += 1;
                                if action == GameAction::Reset {
                                    fall.start();
                                }
                            }
                        }
                        Some(Command::Quit) | None => break,
                    }
                }

                _ = render.tick() => {
                    summary.frames += 1;
                    sink.present(&session.snapshot())?;
                }
            }
        }

        debug_assert_eq!(fall.is_armed(), session.is_running());
        summary.final_score = session.score();
        info!(
            "scheduler stopped after {} fall ticks, score {}",
            summary.fall_ticks, summary.final_score
        );
        Ok(summary)
    }
}
