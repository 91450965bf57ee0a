//! Terminal presentation collaborator for the tick scheduler.

use anyhow::Result;
use log::info;

use crate::core::GameSnapshot;
use crate::engine::FrameSink;
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Draws every render tick to the terminal.
///
/// Holds one reusable framebuffer; the renderer swaps it with the previous
/// frame so steady-state frames do not allocate.
pub struct TerminalFrontend<'a> {
    renderer: &'a mut TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    final_scores: Vec<u32>,
}

impl<'a> TerminalFrontend<'a> {
    pub fn new(renderer: &'a mut TerminalRenderer) -> Self {
        Self {
            renderer,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            final_scores: Vec::new(),
        }
    }

    /// Final score of every game that ended during this run.
    pub fn final_scores(&self) -> &[u32] {
        &self.final_scores
    }
}

impl FrameSink for TerminalFrontend<'_> {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(snapshot, Viewport::new(w, h), &mut self.fb);
        self.renderer.present(&mut self.fb)
    }

    fn game_over(&mut self, final_score: u32) -> Result<()> {
        info!("game over reported to terminal, score {}", final_score);
        self.final_scores.push(final_score);
        Ok(())
    }
}
