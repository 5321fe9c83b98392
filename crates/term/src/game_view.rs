//! GameView: maps a `core::GameSnapshot` and the HUD text into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//!  MATCHES 4   GUESSES 10   LOWEST 24
//!              AVOID SPAMMING!
//! ┌──────────────────────────────────────┐
//! │  ░░░░░░░░░  ░░░░░░░░░  ░░░░░░░░░ ... │
//! │ ▶   red   ◀ ░░░░░░░░░  ░░░░░░░░░     │
//! │  ...                                 │
//! └──────────────────────────────────────┘
//!             [ PLAY AGAIN ]
//! ```
//!
//! Tile faces come from [`Visibility`] alone: a hidden tile never shows its color.

use crate::core::{GameSnapshot, HudText, SessionPhase, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, TileId, Visibility, BOARD_COLUMNS};

const PAD_X: u16 = 2;
const PAD_Y: u16 = 1;
const GAP_X: u16 = 2;
const GAP_Y: u16 = 1;
/// HUD line and warning line above the frame.
const HEADER_ROWS: u16 = 2;
/// Control line and key hints below the frame.
const FOOTER_ROWS: u16 = 2;

const START_LABEL: &str = "[ START GAME ]";
const PLAY_AGAIN_LABEL: &str = "[ PLAY AGAIN ]";
const KEY_HINTS: &str = "arrows/hjkl move  space select  r play again  q quit";

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

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

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tile(TileId),
    /// The start game / play again control.
    Control,
}

/// Screen positions for one frame. Shared by rendering and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub columns: u16,
    pub rows: u16,
    pub control_x: u16,
    pub control_y: u16,
    pub control_w: u16,
}

/// A lightweight terminal renderer for the pairs board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    columns: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for the longest color name.
        Self {
            cell_w: 9,
            cell_h: 3,
            columns: BOARD_COLUMNS,
        }
    }
}

impl GameView {
    /// Frame geometry for a board of `tile_count` tiles, centered in `viewport`.
    pub fn layout(&self, viewport: Viewport, tile_count: usize) -> BoardLayout {
        let cols = self.columns as usize;
        let rows = tile_count.div_ceil(cols).max(1) as u16;

        let frame_w = 2 + PAD_X + self.columns * (self.cell_w + GAP_X);
        let frame_h = 2 + PAD_Y + rows * (self.cell_h + GAP_Y);
        let total_h = HEADER_ROWS + frame_h + FOOTER_ROWS;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = viewport.height.saturating_sub(total_h) / 2 + HEADER_ROWS;

        let control_w = START_LABEL.chars().count() as u16;
        BoardLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            columns: self.columns,
            rows,
            control_x: frame_x + frame_w.saturating_sub(control_w) / 2,
            control_y: frame_y + frame_h,
            control_w,
        }
    }

    /// Top-left screen cell of tile `index`.
    fn tile_origin(&self, layout: &BoardLayout, index: usize) -> (u16, u16) {
        let col = (index % self.columns as usize) as u16;
        let row = (index / self.columns as usize) as u16;
        (
            layout.frame_x + 1 + PAD_X + col * (self.cell_w + GAP_X),
            layout.frame_y + 1 + PAD_Y + row * (self.cell_h + GAP_Y),
        )
    }

    /// Map a screen cell to the tile or control under it. Gaps hit nothing.
    pub fn hit_test(&self, viewport: Viewport, tile_count: usize, x: u16, y: u16) -> Option<Hit> {
        let layout = self.layout(viewport, tile_count);

        if y == layout.control_y
            && x >= layout.control_x
            && x < layout.control_x + layout.control_w
        {
            return Some(Hit::Control);
        }

        let left = layout.frame_x + 1 + PAD_X;
        let top = layout.frame_y + 1 + PAD_Y;
        if x < left || y < top {
            return None;
        }
        let (dx, dy) = (x - left, y - top);
        let (stride_x, stride_y) = (self.cell_w + GAP_X, self.cell_h + GAP_Y);
        if dx % stride_x >= self.cell_w || dy % stride_y >= self.cell_h {
            return None;
        }

        let col = dx / stride_x;
        let row = dy / stride_y;
        if col >= self.columns {
            return None;
        }
        let index = row as usize * self.columns as usize + col as usize;
        (index < tile_count).then_some(Hit::Tile(TileId(index)))
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// `cursor` is the keyboard-highlighted tile, if any.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudText,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(SCREEN_BG, SCREEN_BG).cell(' '));

        let layout = self.layout(viewport, snap.tiles.len());
        let board = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        self.draw_hud(fb, hud, &layout);

        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            board,
        );
        draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        for (i, tile) in snap.tiles.iter().enumerate() {
            self.draw_tile(fb, &layout, i, *tile);
        }

        if snap.phase == SessionPhase::Playing {
            if let Some(i) = cursor.filter(|&i| i < snap.tiles.len()) {
                self.draw_cursor(fb, &layout, i, snap.playable());
            }
        }

        match snap.phase {
            SessionPhase::NotStarted => {
                draw_overlay_text(fb, &layout, "PRESS ENTER TO START");
            }
            SessionPhase::Finished => {
                let y = draw_overlay_text(fb, &layout, "ALL PAIRS FOUND");
                draw_guess_total(fb, &layout, y + 1, snap.turns);
            }
            SessionPhase::Playing => {}
        }

        let label = if snap.phase == SessionPhase::NotStarted {
            START_LABEL
        } else {
            PLAY_AGAIN_LABEL
        };
        let control = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(50, 90, 160)).bold();
        fb.put_str(layout.control_x, layout.control_y, label, control);

        let hints = CellStyle::new(Rgb::new(150, 150, 150), SCREEN_BG).dim();
        let hint_w = KEY_HINTS.chars().count() as u16;
        fb.put_str(
            viewport.width.saturating_sub(hint_w) / 2,
            layout.control_y + 1,
            KEY_HINTS,
            hints,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        hud: &HudText,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, cursor, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, hud: &HudText, layout: &BoardLayout) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let y = layout.frame_y.saturating_sub(HEADER_ROWS);
        let mut x = layout.frame_x + 1;
        x = fb.put_str(x, y, "MATCHES ", label);
        x = fb.put_str(x, y, &hud.matches, value);
        x = fb.put_str(x + 3, y, "GUESSES ", label);
        x = fb.put_str(x, y, &hud.guesses, value);
        x = fb.put_str(x + 3, y, "LOWEST ", label);
        let lowest = if hud.lowest.is_empty() {
            "-"
        } else {
            hud.lowest.as_str()
        };
        fb.put_str(x, y, lowest, value);

        if !hud.warning.is_empty() {
            let warn = CellStyle::new(Rgb::new(255, 90, 90), SCREEN_BG).bold();
            let w = hud.warning.chars().count() as u16;
            let wx = layout.frame_x + layout.frame_w.saturating_sub(w) / 2;
            fb.put_str(wx, y + 1, &hud.warning, warn);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        index: usize,
        tile: TileSnapshot,
    ) {
        let (px, py) = self.tile_origin(layout, index);

        let Some(color) = tile.shown else {
            let back = CellStyle::new(Rgb::new(110, 110, 125), BOARD_BG);
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '░', back);
            return;
        };

        let face = color_rgb(color);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::new(face, face));

        // Matched tiles stay face up but recede.
        let bold = tile.visibility == Visibility::Revealed;
        let mut text = CellStyle::new(contrast_fg(face), face);
        text.bold = bold;
        text.dim = !bold;
        let name = color.as_str();
        let name_w = (name.chars().count() as u16).min(self.cell_w);
        let name: String = name.chars().take(name_w as usize).collect();
        fb.put_str(
            px + (self.cell_w - name_w) / 2,
            py + self.cell_h / 2,
            &name,
            text,
        );
    }

    /// `active` is false while a pair is resolving and selects are refused.
    fn draw_cursor(&self, fb: &mut FrameBuffer, layout: &BoardLayout, index: usize, active: bool) {
        let (px, py) = self.tile_origin(layout, index);
        let style = CellStyle::new(Rgb::new(250, 220, 80), BOARD_BG);
        let style = if active { style.bold() } else { style.dim() };
        let mid = py + self.cell_h / 2;
        fb.put_char(px.saturating_sub(1), mid, '▶', style);
        fb.put_char(px + self.cell_w, mid, '◀', style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Centered in the frame. Returns the row written.
fn draw_overlay_text(fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) -> u16 {
    let mid_y = layout.frame_y + layout.frame_h / 2;
    let text_w = text.chars().count() as u16;
    let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str(x, mid_y, text, style);
    mid_y
}

/// "IN <n> GUESSES", centered under the end-of-game overlay.
fn draw_guess_total(fb: &mut FrameBuffer, layout: &BoardLayout, y: u16, turns: u32) {
    let digits = turns.checked_ilog10().unwrap_or(0) as u16 + 1;
    let text_w = "IN  GUESSES".len() as u16 + digits;
    let style = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG);
    let mut x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
    x = fb.put_str(x, y, "IN ", style);
    x = fb.put_u32(x, y, turns, style);
    fb.put_str(x, y, " GUESSES", style);
}

/// Screen color for a tile face.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(220, 50, 50),
        Color::Blue => Rgb::new(60, 100, 230),
        Color::Green => Rgb::new(60, 180, 75),
        Color::Yellow => Rgb::new(240, 220, 60),
        Color::Orange => Rgb::new(255, 150, 30),
        Color::Purple => Rgb::new(140, 70, 200),
        Color::Pink => Rgb::new(255, 130, 190),
        Color::Brown => Rgb::new(140, 90, 45),
        Color::Gray => Rgb::new(128, 128, 128),
        Color::Black => Rgb::new(12, 12, 12),
        Color::Cyan => Rgb::new(60, 210, 220),
        Color::Magenta => Rgb::new(220, 50, 220),
    }
}

/// Black or white, whichever reads better on `bg`.
fn contrast_fg(bg: Rgb) -> Rgb {
    let luma = 299 * bg.r as u32 + 587 * bg.g as u32 + 114 * bg.b as u32;
    if luma > 128_000 {
        Rgb::new(0, 0, 0)
    } else {
        Rgb::new(255, 255, 255)
    }
}
