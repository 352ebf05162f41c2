//! Terminal output capability.
//!
//! [`Surface`] is the only thing the renderer knows about the terminal.
//! [`TerminalSurface`] implements it with crossterm, queueing commands into a
//! byte buffer and writing them to stdout on flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::Cell;
use crate::types::Tint;

pub trait Surface {
    fn move_to(&mut self, x: u16, y: u16) -> Result<()>;

    fn clear(&mut self) -> Result<()>;

    /// Write one styled glyph at the cursor, then reset the style.
    fn put(&mut self, cell: Cell) -> Result<()>;

    /// Write bright white text at the cursor, then reset the style.
    ///
    /// Surfaces without a text style fall back to one black cell per char.
    fn put_text(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            self.put(Cell::new(ch, Tint::Black))?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        (**self).move_to(x, y)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn put(&mut self, cell: Cell) -> Result<()> {
        (**self).put(cell)
    }

    fn put_text(&mut self, text: &str) -> Result<()> {
        (**self).put_text(text)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

pub struct TerminalSurface {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()?;
        tracing::debug!("terminal entered raw mode");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        tracing::debug!("terminal restored");
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.buf.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn put(&mut self, cell: Cell) -> Result<()> {
        encode_cell_into(&mut self.buf, cell)
    }

    fn put_text(&mut self, text: &str) -> Result<()> {
        encode_text_into(&mut self.buf, text)
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

/// Encode a styled glyph followed by a style reset.
pub fn encode_cell_into(out: &mut Vec<u8>, cell: Cell) -> Result<()> {
    out.queue(SetBackgroundColor(tint_to_color(cell.tint)))?;
    out.queue(Print(cell.ch))?;
    out.queue(ResetColor)?;
    Ok(())
}

/// Encode bold bright-white text followed by a style reset.
pub fn encode_text_into(out: &mut Vec<u8>, text: &str) -> Result<()> {
    out.queue(SetForegroundColor(Color::White))?;
    out.queue(SetAttribute(Attribute::Bold))?;
    out.queue(Print(text))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    Ok(())
}

pub fn tint_to_color(tint: Tint) -> Color {
    match tint {
        Tint::Black => Color::Black,
        Tint::Red => Color::DarkRed,
        Tint::Green => Color::DarkGreen,
        Tint::Yellow => Color::DarkYellow,
        Tint::Blue => Color::DarkBlue,
        Tint::Magenta => Color::DarkMagenta,
        Tint::Cyan => Color::DarkCyan,
        Tint::White => Color::Grey,
    }
}
