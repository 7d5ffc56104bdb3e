//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. The layout is a terminal
//! rendition of the original game screen: score header, bordered grid, snake
//! and food, control hints, and modal overlays for pause and game over.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

// High-visibility palette carried over from the original theme.
const SNAKE_HEAD: Rgb = Rgb::new(0x39, 0xFF, 0x14);
const SNAKE_BODY: Rgb = Rgb::new(0x00, 0xFF, 0x41);
const FOOD_RED: Rgb = Rgb::new(0xFF, 0x17, 0x44);
const ACCENT_CYAN: Rgb = Rgb::new(0x00, 0xE5, 0xFF);
const SCORE_YELLOW: Rgb = Rgb::new(0xFF, 0xEA, 0x00);
const BOARD_BG: Rgb = Rgb::new(0x12, 0x12, 0x12);
const GRID_DOT: Rgb = Rgb::new(0x2A, 0x2A, 0x32);
const HINT_GRAY: Rgb = Rgb::new(0xE0, 0xE0, 0xE0);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is resized to the
    /// viewport and fully repainted here, and diffed by the renderer.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(HINT_GRAY, BLACK).into_cell(' '));

        // Saturating geometry: grids far larger than any terminal clip at
        // the framebuffer edge instead of overflowing cell coordinates.
        let n = grid_coord(state.grid_size());
        let board_w = n.saturating_mul(self.cell_w);
        let board_h = n.saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_chrome(fb, state, start_x, start_y, frame_w, frame_h);

        // Play area background with faint grid dots. Only cells the viewport
        // can show need painting; anything past the edge clips anyway.
        let bg = CellStyle::new(GRID_DOT, BOARD_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_w.min(viewport.width),
            board_h.min(viewport.height),
            ' ',
            bg,
        );
        let cols = n.min((viewport.width / self.cell_w.max(1)).saturating_add(1));
        let rows = n.min((viewport.height / self.cell_h.max(1)).saturating_add(1));
        for gy in 0..rows {
            for gx in 0..cols {
                let (px, py) = self.cell_origin(start_x, start_y, gx, gy);
                fb.put_char(px, py, '·', bg);
            }
        }

        // Food, then body, then head, so the head wins any overlap on the
        // game-over frame.
        let food = state.food();
        let (px, py) = self.cell_origin(start_x, start_y, grid_coord(food.x), grid_coord(food.y));
        self.fill_cell(fb, px, py, '●', CellStyle::new(FOOD_RED, BOARD_BG).bold());

        for &segment in state.snake().iter().skip(1) {
            let (px, py) =
                self.cell_origin(start_x, start_y, grid_coord(segment.x), grid_coord(segment.y));
            self.fill_cell(fb, px, py, '█', CellStyle::new(SNAKE_BODY, BOARD_BG));
        }
        let head = state.head();
        let (px, py) = self.cell_origin(start_x, start_y, grid_coord(head.x), grid_coord(head.y));
        self.fill_cell(fb, px, py, '█', CellStyle::new(SNAKE_HEAD, BOARD_BG).bold());

        // Modal overlays.
        if state.game_over() {
            let score_line = format!("Score: {}", state.score());
            self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", &score_line, "r play again · q exit"],
            );
        } else if state.paused() {
            self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["PAUSED", "p resume · q exit"],
            );
        }
    }

    /// Convenience helper that allocates a fresh framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Border, score header, and control-hints footer.
    fn draw_chrome(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let border = CellStyle::new(ACCENT_CYAN, BLACK);

        fb.put_char(start_x, start_y, '┌', border);
        fb.put_char(start_x + frame_w - 1, start_y, '┐', border);
        fb.put_char(start_x, start_y + frame_h - 1, '└', border);
        fb.put_char(start_x + frame_w - 1, start_y + frame_h - 1, '┘', border);
        for dx in 1..frame_w - 1 {
            fb.put_char(start_x + dx, start_y, '─', border);
            fb.put_char(start_x + dx, start_y + frame_h - 1, '─', border);
        }
        for dy in 1..frame_h - 1 {
            fb.put_char(start_x, start_y + dy, '│', border);
            fb.put_char(start_x + frame_w - 1, start_y + dy, '│', border);
        }

        if start_y > 0 {
            let score = format!("SCORE {}", state.score());
            fb.put_str(
                start_x,
                start_y - 1,
                &score,
                CellStyle::new(SCORE_YELLOW, BLACK).bold(),
            );
        }
        // Footer hints; put_str clips when the viewport is too short.
        fb.put_str(
            start_x,
            start_y + frame_h,
            "arrows steer · p pause · r restart · q quit",
            CellStyle::new(HINT_GRAY, BLACK),
        );
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let panel = CellStyle::new(ACCENT_CYAN, BLACK);
        let mid_y = start_y + frame_h / 2;
        let top = mid_y.saturating_sub(lines.len() as u16 / 2 + 1);

        let panel_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 4;
        let panel_x = start_x + frame_w.saturating_sub(panel_w) / 2;
        fb.fill_rect(panel_x, top, panel_w, lines.len() as u16 + 2, ' ', panel);

        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(w) / 2;
            let style = if i == 0 {
                CellStyle::new(ACCENT_CYAN, BLACK).bold()
            } else {
                CellStyle::new(SCORE_YELLOW, BLACK)
            };
            fb.put_str(x, top + 1 + i as u16, line, style);
        }
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, gx: u16, gy: u16) -> (u16, u16) {
        (
            start_x
                .saturating_add(1)
                .saturating_add(gx.saturating_mul(self.cell_w)),
            start_y
                .saturating_add(1)
                .saturating_add(gy.saturating_mul(self.cell_h)),
        )
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16, ch: char, style: CellStyle) {
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                fb.put_char(px.saturating_add(dx), py.saturating_add(dy), ch, style);
            }
        }
    }
}

/// Clamp a grid coordinate into `u16` cell space; out-of-range values clip
/// at the framebuffer edge like any other off-screen cell.
fn grid_coord(v: i32) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
