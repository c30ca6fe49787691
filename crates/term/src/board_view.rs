//! BoardView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::glyph::glyph;
use crate::core::{BoardSnapshot, GameStatus, SessionKind};
use crate::fb::{CellStyle, FrameBuffer};
use crate::theme::scheme_for_level;
use crate::types::{Side, Tile};

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

/// Terminal renderer for a board snapshot.
///
/// Layout, top to bottom: a header line, the framed board, a message line.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for BoardView {
    fn default() -> Self {
        // Two columns per tile: the glyph plus a connector towards the east.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl BoardView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            *fb = FrameBuffer::new(viewport.width, viewport.height);
        }

        let scheme = match snap.kind {
            SessionKind::Play => scheme_for_level(snap.level),
            SessionKind::Editor => scheme_for_level(0),
        };
        let base = CellStyle::new(scheme.foreground, scheme.background);
        fb.fill(' ', base);

        if !snap.has_board() {
            let mid = viewport.height / 2;
            let text = snap.message.as_deref().unwrap_or("Game complete!");
            fb.put_centered(mid, text, base.bold());
            return;
        }

        let board_w = to_u16(snap.width) * self.cell_w;
        let board_h = to_u16(snap.height);
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;
        let total_h = frame_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let frame_y = start_y + 1;

        let header = match snap.kind {
            SessionKind::Play => format!("LEVEL {}", snap.level + 1),
            SessionKind::Editor => format!(
                "EDITOR {}×{}  loose {}",
                snap.width, snap.height, snap.loose_ends
            ),
        };
        self.put_over_frame(fb, start_x, start_y, frame_w, &header, base.bold());

        self.draw_border(fb, start_x, frame_y, frame_w, frame_h, base);

        let show_cursor = snap.kind == SessionKind::Editor || snap.status == GameStatus::Playing;
        for row in 0..snap.height {
            for col in 0..snap.width {
                let Some(tile) = snap.tile(row, col) else {
                    continue;
                };
                let style = if show_cursor && snap.cursor == (row, col) {
                    base.bold().reversed()
                } else {
                    base
                };
                let px = start_x + 1 + to_u16(col) * self.cell_w;
                let py = frame_y + 1 + to_u16(row);
                self.draw_tile(fb, px, py, tile, snap.kind, style);
            }
        }

        if let Some(message) = &snap.message {
            self.put_over_frame(fb, start_x, frame_y + frame_h, frame_w, message, base.bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        tile: Tile,
        kind: SessionKind,
        style: CellStyle,
    ) {
        let ch = if tile.is_empty() && kind == SessionKind::Editor {
            '·'
        } else {
            glyph(tile)
        };
        fb.put_char(x, y, ch, style);

        let connector = if tile.faces(Side::East) { '━' } else { ' ' };
        for dx in 1..self.cell_w {
            fb.put_char(x + dx, y, connector, style);
        }
    }

    /// Text centred on the frame, spilling past it on both sides if wider.
    fn put_over_frame(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        y: u16,
        frame_w: u16,
        text: &str,
        style: CellStyle,
    ) {
        let len = to_u16(text.chars().count());
        let x = (start_x + frame_w / 2).saturating_sub(len / 2);
        fb.put_str(x, y, text, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
