//! Tick scheduler tests on tokio's paused clock

use std::time::Duration;

use anyhow::{bail, Result};
use tokio::sync::mpsc;
use tokio::time::sleep;

use blockfall::core::{ActivePiece, GameSession, GameSnapshot};
use blockfall::engine::{Command, FrameSink, RunSummary, TickScheduler};
use blockfall::types::{GameAction, GamePhase, PieceKind, Rgb};

const FALL: Duration = Duration::from_millis(1000);
const FRAME: Duration = Duration::from_micros(16_666);

#[derive(Default)]
struct RecordingSink {
    frames: u64,
    last: Option<GameSnapshot>,
    game_overs: Vec<u32>,
}

impl FrameSink for RecordingSink {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.frames += 1;
        self.last = Some(*snapshot);
        Ok(())
    }

    fn game_over(&mut self, final_score: u32) -> Result<()> {
        self.game_overs.push(final_score);
        Ok(())
    }
}

fn piece_at(kind: PieceKind, x: i8, y: i8) -> ActivePiece {
    ActivePiece {
        x,
        y,
        ..ActivePiece::new(kind)
    }
}

/// A session whose next fall tick locks an O into the top row.
fn session_about_to_end() -> GameSession {
    let mut session = GameSession::new(3);
    for y in 2..20 {
        session.board_mut().set(0, y, Some(Rgb::new(90, 90, 90)));
    }
    session.place_active(piece_at(PieceKind::O, 0, 0));
    session
}

async fn send_after(tx: &mpsc::Sender<Command>, delay: Duration, cmd: Command) {
    sleep(delay).await;
    tx.send(cmd).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_fall_and_render_cadence() {
    let scheduler = TickScheduler::new(FALL, FRAME);
    let mut session = GameSession::new(1);
    let mut sink = RecordingSink::default();
    let (tx, mut rx) = mpsc::channel(8);

    let (summary, _) = tokio::join!(
        scheduler.run(&mut session, &mut rx, &mut sink),
        send_after(&tx, Duration::from_millis(3500), Command::Quit),
    );
    let summary = summary.unwrap();

    assert_eq!(summary.fall_ticks, 3);
    assert_eq!(session.active().y, 3);
    assert!(summary.frames >= 200, "only {} frames", summary.frames);
    assert_eq!(summary.frames, sink.frames);
    assert_eq!(summary.games_finished, 0);
}

#[tokio::test(start_paused = true)]
async fn test_actions_apply_between_ticks() {
    let scheduler = TickScheduler::new(FALL, FRAME);
    let mut session = GameSession::new(1);
    session.place_active(piece_at(PieceKind::T, 4, 0));
    let mut sink = RecordingSink::default();
    let (tx, mut rx) = mpsc::channel(8);

    let driver = async {
        send_after(&tx, Duration::from_millis(10), Command::Action(GameAction::MoveLeft)).await;
        send_after(&tx, Duration::from_millis(10), Command::Action(GameAction::SoftDrop)).await;
        // Running game: reset is ignored.
        send_after(&tx, Duration::from_millis(10), Command::Action(GameAction::Reset)).await;
        send_after(&tx, Duration::from_millis(100), Command::Quit).await;
    };
    let (summary, _) = tokio::join!(scheduler.run(&mut session, &mut rx, &mut sink), driver);
    let summary = summary.unwrap();

    assert_eq!(summary.fall_ticks, 0);
    assert_eq!(summary.actions_applied, 2);
    assert_eq!((session.active().x, session.active().y), (3, 1));
    let last = sink.last.unwrap();
    assert_eq!(last.active.map(|p| (p.x, p.y)), Some((3, 1)));
}

#[tokio::test(start_paused = true)]
async fn test_game_over_stops_fall_ticks_and_reset_restarts_them() {
    let scheduler = TickScheduler::new(FALL, FRAME);
    let mut session = session_about_to_end();
    let mut sink = RecordingSink::default();
    let (tx, mut rx) = mpsc::channel(8);

    let driver = async {
        // Game ends on the first tick at 1s; nothing falls for the next 5s.
        send_after(&tx, Duration::from_millis(6000), Command::Action(GameAction::Reset)).await;
        // Fresh game ticks once per period: at 7s, 8s and 9s.
        send_after(&tx, Duration::from_millis(3500), Command::Quit).await;
    };
    let (summary, _) = tokio::join!(scheduler.run(&mut session, &mut rx, &mut sink), driver);
    let summary: RunSummary = summary.unwrap();

    assert_eq!(sink.game_overs, vec![10]);
    assert_eq!(summary.games_finished, 1);
    assert_eq!(summary.fall_ticks, 4);
    assert_eq!(summary.actions_applied, 1);
    assert!(session.is_running());
    assert_eq!(session.active().y, 3);
    assert_eq!(session.score(), 0);
    assert_eq!(session.pieces_locked(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_frames_after_game_over_have_no_active_piece() {
    let scheduler = TickScheduler::new(FALL, FRAME);
    let mut session = session_about_to_end();
    let mut sink = RecordingSink::default();
    let (tx, mut rx) = mpsc::channel(8);

    let (summary, _) = tokio::join!(
        scheduler.run(&mut session, &mut rx, &mut sink),
        send_after(&tx, Duration::from_millis(1500), Command::Quit),
    );
    summary.unwrap();

    let last = sink.last.unwrap();
    assert_eq!(last.phase, GamePhase::GameOver);
    assert!(last.active.is_none());
    assert_eq!(last.score, 10);
}

#[tokio::test(start_paused = true)]
async fn test_closed_channel_stops_loop() {
    let scheduler = TickScheduler::new(FALL, FRAME);
    let mut session = GameSession::new(1);
    let mut sink = RecordingSink::default();
    let (tx, mut rx) = mpsc::channel::<Command>(8);
    drop(tx);

    let summary = scheduler
        .run(&mut session, &mut rx, &mut sink)
        .await
        .unwrap();
    assert_eq!(summary.fall_ticks, 0);
}

#[tokio::test(start_paused = true)]
async fn test_sink_error_aborts_run() {
    struct FailingSink;

    impl FrameSink for FailingSink {
        fn present(&mut self, _snapshot: &GameSnapshot) -> Result<()> {
            bail!("terminal gone")
        }
    }

    let scheduler = TickScheduler::new(FALL, FRAME);
    let mut session = GameSession::new(1);
    let (_tx, mut rx) = mpsc::channel::<Command>(8);

    let err = scheduler
        .run(&mut session, &mut rx, &mut FailingSink)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("terminal gone"));
}
