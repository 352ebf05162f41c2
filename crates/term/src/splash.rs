//! Startup logo.

use anyhow::Result;

use crate::surface::Surface;
use crate::types::{HEIGHT, WIDTH};

pub const LOGO: [&str; 8] = [
    "███████╗ ██████╗  ██████╗ ██████╗ ██████╗ ",
    "██╔════╝██╔═══██╗██╔════╝╚════██╗██╔══██╗",
    "█████╗  ██║   ██║██║  ███╗ █████╔╝██║  ██║",
    "██╔══╝  ██║   ██║██║   ██║██╔═══╝ ██║  ██║",
    "██║     ╚██████╔╝╚██████╔╝███████╗██████╔╝",
    "╚═╝      ╚═════╝  ╚═════╝ ╚══════╝╚═════╝ ",
    "",
    "Fog2D Engine",
];

/// Column where a splash line of `len` chars starts.
///
/// Lines that fit are centered on the grid. Lines wider than the grid
/// start at column 0 and run past the right edge.
pub fn splash_left(len: usize) -> u16 {
    let len = u16::try_from(len).unwrap_or(u16::MAX);
    (WIDTH / 2).saturating_sub(len / 2)
}

/// Clear the screen, write [`LOGO`] as bright text, then flush.
///
/// The art rows are 41-42 columns wide, so they start at column 0 and their
/// last glyphs land at x = 40..41, outside the 40-column grid. Only the
/// caption is actually centered. Nothing is clipped; the terminal decides
/// what happens to the overflow.
pub fn draw_splash(out: &mut impl Surface) -> Result<()> {
    out.clear()?;

    let top = (HEIGHT / 2).saturating_sub(LOGO.len() as u16 / 2);
    for (row, line) in LOGO.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        out.move_to(splash_left(line.chars().count()), top + row as u16)?;
        out.put_text(line)?;
    }

    out.flush()
}
