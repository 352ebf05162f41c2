//! Renderer: double-buffered, diff-based presentation.
//!
//! How it works:
//!   1. Callers `draw` into the back buffer during a frame
//!   2. `present` compares each drawn back cell with the front buffer
//!   3. Only cells that are new or changed are sent to the surface
//!   4. Front and back are swapped, and back is reset to empty
//!
//! A position drawn last frame but not this one is not erased; draw a
//! background explicitly to clear it.

use anyhow::Result;

use crate::core::Canvas;
use crate::fb::{Cell, FrameBuffer};
use crate::surface::Surface;
use crate::types::Tint;

#[derive(Debug, Default)]
pub struct Renderer {
    front: FrameBuffer,
    back: FrameBuffer,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a cell for the next present. Out-of-bounds draws are ignored;
    /// the last draw to a position wins.
    pub fn draw(&mut self, x: i32, y: i32, ch: char, tint: Tint) {
        self.back.set(x, y, Cell::new(ch, tint));
    }

    /// Cells drawn so far this frame.
    pub fn back(&self) -> &FrameBuffer {
        &self.back
    }

    /// Cells committed by the last present.
    pub fn front(&self) -> &FrameBuffer {
        &self.front
    }

    /// Forget what the terminal shows, so the next present re-emits every
    /// drawn cell. Call after the screen was cleared behind our back.
    pub fn invalidate(&mut self) {
        self.front.clear();
    }

    /// Send changed cells to `out`, flush it, and commit the frame.
    ///
    /// Returns the number of cells written.
    pub fn present<S: Surface>(&mut self, out: &mut S) -> Result<usize> {
        let mut written = 0;
        for_each_changed(&self.front, &self.back, |x, y, cell| {
            out.move_to(x, y)?;
            out.put(cell)?;
            written += 1;
            Ok(())
        })?;
        out.flush()?;

        // Swap so neither buffer is reallocated, then reuse the old front as
        // the next back.
        std::mem::swap(&mut self.front, &mut self.back);
        self.back.clear();

        tracing::trace!(written, "frame presented");
        Ok(written)
    }
}

impl Canvas for Renderer {
    fn draw(&mut self, x: i32, y: i32, ch: char, tint: Tint) {
        Renderer::draw(self, x, y, ch, tint);
    }
}

/// Visit every cell drawn in `next` that is absent from or different in `prev`.
fn for_each_changed(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, Cell) -> Result<()>,
) -> Result<()> {
    for ((i, a), b) in prev.cells().iter().enumerate().zip(next.cells()) {
        let Some(cell) = *b else {
            continue;
        };
        if *a == Some(cell) {
            continue;
        }
        let x = (i % next.width() as usize) as u16;
        let y = (i / next.width() as usize) as u16;
        f(x, y, cell)?;
    }
    Ok(())
}
