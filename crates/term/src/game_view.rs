//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::tile_style;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const SCREEN_BG: Rgb = Rgb::new(40, 44, 52);
const BOARD_BG: Rgb = Rgb::new(60, 64, 72);
const GLOW: Rgb = Rgb::new(255, 255, 0);

const CONTROLS: &str = "←→ move  ↓ drop  R restart  Q quit";

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns (last column is a gap).
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves a 6-wide tile face, enough for six-digit values.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Position of the board frame inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered board for a `cols` x `rows` grid.
    pub fn frame_size(&self, cols: usize, rows: usize) -> (u16, u16) {
        let cols = u16::try_from(cols).unwrap_or(u16::MAX);
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        (
            cols.saturating_mul(self.cell_w).saturating_add(2),
            rows.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let cols = snap.grid.width();
        let rows = snap.grid.height();
        let (frame_w, frame_h) = self.frame_size(cols, rows);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        let board = CellStyle::new(Rgb::new(110, 114, 122), BOARD_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, frame_w - 2, frame_h - 2, ' ', board);
        self.draw_border(fb, frame, CellStyle::new(Rgb::new(100, 104, 112), SCREEN_BG));

        for (row, values) in snap.grid.rows().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    self.draw_empty_cell(fb, frame, row as u16, col as u16);
                } else {
                    self.draw_tile(fb, frame, row as u16, col as u16, value, false);
                }
            }
        }

        if let Some(f) = snap.falling {
            if !snap.game_over {
                self.draw_tile(fb, frame, f.row as u16, f.col as u16, f.value, true);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        let hint = CellStyle::new(Rgb::new(180, 180, 180), SCREEN_BG);
        fb.put_str_centered(frame.x, frame.y + frame.h, frame.w, CONTROLS, hint);

        if snap.game_over {
            self.draw_game_over(fb, snap, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Top-left terminal cell of a grid cell.
    fn cell_origin(&self, frame: Frame, row: u16, col: u16) -> (u16, u16) {
        (
            frame.x.saturating_add(1).saturating_add(col.saturating_mul(self.cell_w)),
            frame.y.saturating_add(1).saturating_add(row.saturating_mul(self.cell_h)),
        )
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, col: u16) {
        let (px, py) = self.cell_origin(frame, row, col);
        let style = CellStyle::new(Rgb::new(90, 94, 102), BOARD_BG).dim();
        fb.put_char(px + (self.cell_w - 1) / 2, py + self.cell_h / 2, '·', style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: u16,
        col: u16,
        value: u32,
        falling: bool,
    ) {
        let (px, py) = self.cell_origin(frame, row, col);
        let face_w = self.cell_w - 1;
        let style = tile_style(value);
        fb.fill_rect(px, py, face_w, self.cell_h, ' ', style);

        if falling && self.cell_h >= 3 {
            let glow = CellStyle {
                fg: GLOW,
                ..style
            };
            for dx in 0..face_w {
                fb.put_char(px + dx, py, '▀', glow);
                fb.put_char(px + dx, py + self.cell_h - 1, '▄', glow);
            }
        }

        let mut digits = [0u8; 10];
        let len = crate::fb::format_u32(value, &mut digits);
        let text = std::str::from_utf8(&digits[..len]).unwrap_or("?");
        fb.put_str_centered(px, py + self.cell_h / 2, face_w, text, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.level, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let next_style = tile_style(snap.next);
        fb.fill_rect(panel_x, y, 6, 1, ' ', next_style);
        let mut digits = [0u8; 10];
        let len = crate::fb::format_u32(snap.next, &mut digits);
        let text = std::str::from_utf8(&digits[..len]).unwrap_or("?");
        fb.put_str_centered(panel_x, y, 6, text, next_style);
        y = y.saturating_add(2);

        if panel_w >= 10 {
            let dim = CellStyle::new(Rgb::new(150, 150, 150), SCREEN_BG).dim();
            fb.put_str(panel_x, y, "SPEED", label);
            y = y.saturating_add(1);
            let n = fb.put_u32(panel_x, y, snap.fall_interval_ms, dim);
            fb.put_str(panel_x + n, y, "ms", dim);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let shade = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(20, 20, 24));
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let top = mid_y.saturating_sub(2);
        fb.fill_rect(frame.x + 1, top, frame.w.saturating_sub(2), 5, ' ', shade);

        let title = shade.bold();
        fb.put_str_centered(frame.x, top, frame.w, "GAME OVER", title);
        let score_line = format!("Final Score: {}", snap.score);
        fb.put_str_centered(frame.x, top + 1, frame.w, &score_line, shade);
        let level_line = format!("Level Reached: {}", snap.level);
        fb.put_str_centered(frame.x, top + 2, frame.w, &level_line, shade);
        fb.put_str_centered(frame.x, top + 4, frame.w, "Press R to restart", shade.dim());
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
