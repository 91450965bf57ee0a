//! GameView: draws a [`GameSnapshot`] into a [`FrameBuffer`].
//!
//! Pure drawing code with no terminal I/O. The board is centered in the
//! viewport with a box border; score and counters go in a panel to its right
//! when there is room.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_COLS, BOARD_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(0x33, 0x33, 0x33);

const BORDER: CellStyle = CellStyle {
    fg: Rgb::new(200, 200, 200),
    bg: BLACK,
    bold: false,
    dim: false,
};
const EMPTY: CellStyle = CellStyle {
    fg: Rgb::new(0x55, 0x55, 0x55),
    bg: BOARD_BG,
    bold: false,
    dim: true,
};
const LABEL: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: BLACK,
    bold: true,
    dim: false,
};
const VALUE: CellStyle = CellStyle { bold: false, ..LABEL };
const HINT: CellStyle = CellStyle { dim: true, ..VALUE };
const BANNER: CellStyle = CellStyle {
    fg: Rgb::new(255, 255, 255),
    ..LABEL
};

const BLOCK_CH: char = '█';
const EMPTY_CH: char = '·';

/// Columns the side panel needs to be drawn at all.
const PANEL_MIN_W: u16 = 10;

const HINTS: [&str; 4] = ["←→ move", "↓ drop", "↑ rotate", "q quit"];

/// Placement of the bordered board inside one viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    /// Top-left corner of the border
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Layout {
    fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    fn center_x(&self, text_w: u16) -> u16 {
        self.x.saturating_add(self.w.saturating_sub(text_w) / 2)
    }

    fn mid_y(&self) -> u16 {
        self.y.saturating_add(self.h / 2)
    }
}

/// Renders snapshots at a fixed cell size.
pub struct GameView {
    /// Terminal columns per board cell
    cell_w: u16,
    /// Terminal rows per board cell
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Terminal glyphs are about twice as tall as wide.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_COLS as u16 * self.cell_w + 2,
            BOARD_ROWS as u16 * self.cell_h + 2,
        )
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (w, h) = self.frame_size();
        Layout {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::BLANK);

        let layout = self.layout(viewport);
        draw_box(fb, layout);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(color) => (BLOCK_CH, block_style(*color)),
                    None => (EMPTY_CH, EMPTY),
                };
                self.paint_cell(fb, layout, x as u16, y as u16, ch, style);
            }
        }

        // Rows above the board are not drawn.
        if let Some(piece) = snap.active {
            let style = block_style(piece.color);
            for (x, y) in piece.cells() {
                if (0..BOARD_COLS as i8).contains(&x) && (0..BOARD_ROWS as i8).contains(&y) {
                    self.paint_cell(fb, layout, x as u16, y as u16, BLOCK_CH, style);
                }
            }
        }

        draw_panel(fb, snap, viewport, layout);

        if snap.game_over() {
            draw_game_over(fb, snap.score, layout);
        }
    }

    /// Render into a freshly allocated framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn paint_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.x + 1 + col * self.cell_w;
        let py = layout.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn block_style(color: Rgb) -> CellStyle {
    CellStyle {
        fg: color,
        bg: BOARD_BG,
        bold: true,
        dim: false,
    }
}

fn draw_box(fb: &mut FrameBuffer, b: Layout) {
    if b.w < 2 || b.h < 2 {
        return;
    }
    let (right, bottom) = (b.x + b.w - 1, b.y + b.h - 1);

    fb.fill_rect(b.x + 1, b.y, b.w - 2, 1, '─', BORDER);
    fb.fill_rect(b.x + 1, bottom, b.w - 2, 1, '─', BORDER);
    fb.fill_rect(b.x, b.y + 1, 1, b.h - 2, '│', BORDER);
    fb.fill_rect(right, b.y + 1, 1, b.h - 2, '│', BORDER);

    for (x, y, ch) in [
        (b.x, b.y, '┌'),
        (right, b.y, '┐'),
        (b.x, bottom, '└'),
        (right, bottom, '┘'),
    ] {
        fb.put_char(x, y, ch, BORDER);
    }
}

fn draw_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: Layout) {
    let x = layout.right().saturating_add(2);
    if viewport.width.saturating_sub(x) < PANEL_MIN_W {
        return;
    }

    let mut y = layout.y;
    for (name, value) in [
        ("SCORE", snap.score),
        ("LINES", snap.lines),
        ("PIECES", snap.pieces_locked),
    ] {
        fb.put_str(x, y, name, LABEL);
        fb.put_u32(x, y + 1, value, VALUE);
        y += 3;
    }
    for hint in HINTS {
        fb.put_str(x, y, hint, HINT);
        y += 1;
    }
}

fn draw_game_over(fb: &mut FrameBuffer, score: u32, layout: Layout) {
    let mid = layout.mid_y();
    let title = "GAME OVER";
    let reset = "R restart";

    fb.put_str(layout.center_x(title.len() as u16), mid - 1, title, BANNER);

    let line_w = "SCORE ".len() as u16 + decimal_width(score);
    let after_label = fb.put_str(layout.center_x(line_w), mid, "SCORE ", BANNER);
    fb.put_u32(after_label, mid, score, BANNER);

    let hint = CellStyle { bold: false, ..BANNER };
    fb.put_str(layout.center_x(reset.len() as u16), mid + 1, reset, hint);
}

fn decimal_width(n: u32) -> u16 {
    n.checked_ilog10().map_or(1, |d| d as u16 + 1)
}
