//! Grid buffer and cell types for terminal rendering.

use crate::types::{Pos, Tint, GRID_CELLS, HEIGHT, WIDTH};

/// A single styled terminal cell.
///
/// Two cells are equal iff glyph and tint match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub tint: Tint,
}

impl Cell {
    pub const fn new(ch: char, tint: Tint) -> Self {
        Self { ch, tint }
    }
}

/// Fixed `WIDTH x HEIGHT` grid of optional cells.
///
/// `None` means nothing was drawn at that position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Row-major (y * WIDTH + x).
    cells: Box<[Option<Cell>; GRID_CELLS]>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            cells: Box::new([None; GRID_CELLS]),
        }
    }

    pub fn width(&self) -> u16 {
        WIDTH
    }

    pub fn height(&self) -> u16 {
        HEIGHT
    }

    pub fn cells(&self) -> &[Option<Cell>] {
        &self.cells[..]
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Pos::new(x, y).index().and_then(|i| self.cells[i])
    }

    /// Write a cell. Out-of-bounds positions are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = Pos::new(x, y).index() {
            self.cells[i] = Some(cell);
        }
    }

    /// Reset every position to empty.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of positions holding a cell.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Occupied positions with their cells, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, Cell)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, c)| {
            c.map(|cell| {
                let x = (i % WIDTH as usize) as u16;
                let y = (i / WIDTH as usize) as u16;
                (x, y, cell)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_in_bounds() {
        let mut fb = FrameBuffer::new();
        fb.set(3, 4, Cell::new('x', Tint::Red));
        assert_eq!(fb.get(3, 4), Some(Cell::new('x', Tint::Red)));
        assert_eq!(fb.get(4, 3), None);
        assert_eq!(fb.len(), 1);
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut fb = FrameBuffer::new();
        let c = Cell::new('x', Tint::Red);
        fb.set(-1, 0, c);
        fb.set(0, -1, c);
        fb.set(WIDTH as i32, 0, c);
        fb.set(0, HEIGHT as i32, c);
        assert!(fb.is_empty());
    }

    #[test]
    fn iter_is_row_major() {
        let mut fb = FrameBuffer::new();
        fb.set(5, 1, Cell::new('b', Tint::White));
        fb.set(7, 0, Cell::new('a', Tint::White));
        let order: Vec<char> = fb.iter().map(|(_, _, c)| c.ch).collect();
        assert_eq!(order, vec!['a', 'b']);
    }

    #[test]
    fn clear_empties_every_position() {
        let mut fb = FrameBuffer::new();
        fb.set(0, 0, Cell::new('.', Tint::Black));
        fb.set(39, 19, Cell::new('.', Tint::Black));
        assert_eq!(fb.len(), 2);
        fb.clear();
        assert!(fb.is_empty());
    }
}
