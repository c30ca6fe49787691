//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs are
//! written; a size change falls back to a full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, keeping a copy to diff the next frame against.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;
        self.last = Some(fb.clone());
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Clear the screen and paint every row of `fb`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        painter.move_to(0, y)?;
        painter.span(fb, 0, y, fb.width())?;
    }
    painter.finish()
}

/// Repaint the cells of `next` that differ from `prev`.
///
/// Frames of different sizes are repainted row by row in full.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for_each_changed_run(prev, next, |x, y, len| {
        painter.move_to(x, y)?;
        painter.span(next, x, y, len)
    })?;
    painter.finish()
}

/// Queues cells into a byte buffer, re-sending attributes only on a style change
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn span(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> Result<()> {
        for dx in 0..len {
            self.cell(fb.get(x + dx, y).unwrap_or_default())?;
        }
        Ok(())
    }

    fn cell(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            queue_style(self.out, cell.style)?;
            self.style = Some(cell.style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    /// Leave the terminal in its default colours.
    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.reverse {
        out.queue(SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for each horizontal run of cells that changed.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let same_size = prev.width() == next.width() && prev.height() == next.height();
    for y in 0..next.height() {
        if !same_size {
            f(0, y, next.width())?;
            continue;
        }
        let mut run_start = None;
        for x in 0..next.width() {
            let changed = prev.get(x, y) != next.get(x, y);
            match (changed, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    f(start, y, x - start)?;
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            f(start, y, next.width() - start)?;
        }
    }
    Ok(())
}
