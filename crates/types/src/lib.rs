//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scene logic, lighting, terminal rendering, input).
//!
//! # Grid Dimensions
//!
//! The drawable area is a fixed character grid:
//!
//! - **Width**: 40 columns (indexed 0-39)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! Anything drawn outside these bounds is silently dropped by the renderer.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 30 | Target frames per second |
//!
//! The frame period is `1 / FPS` seconds and is not compensated for the time
//! spent updating and presenting a frame.
//!
//! # Brightness Tiers
//!
//! Entity colors are banded by the light reaching them:
//!
//! | Brightness | Displayed tint |
//! |------------|----------------|
//! | `< 0.2` | [`Tint::DARKEST`] |
//! | `< 0.5` | [`Tint::MID`] |
//! | otherwise | the entity's own tint |
//!
//! # Examples
//!
//! ```
//! use fog2d_types::{Pos, Tint, HEIGHT, WIDTH};
//!
//! assert_eq!(WIDTH, 40);
//! assert_eq!(HEIGHT, 20);
//!
//! assert!(Pos::new(39, 19).in_bounds());
//! assert!(!Pos::new(40, 0).in_bounds());
//!
//! assert_eq!(Tint::for_brightness(0.1, Tint::Red), Tint::Black);
//! assert_eq!(Tint::for_brightness(0.3, Tint::Red), Tint::Blue);
//! assert_eq!(Tint::for_brightness(0.9, Tint::Red), Tint::Red);
//! ```

/// Grid width in cells (40 columns)
pub const WIDTH: u16 = 40;

/// Grid height in cells (20 rows)
pub const HEIGHT: u16 = 20;

/// Number of cells in the grid.
pub const GRID_CELLS: usize = (WIDTH as usize) * (HEIGHT as usize);

/// Target frame rate.
pub const FPS: u32 = 30;

/// Brightness below this renders in the darkest tier.
pub const DARK_THRESHOLD: f64 = 0.2;

/// Brightness below this (and at least [`DARK_THRESHOLD`]) renders in the mid tier.
pub const DIM_THRESHOLD: f64 = 0.5;

/// Upper clamp for summed light contributions.
pub const MAX_BRIGHTNESS: f64 = 1.0;

/// Glyph used for entities that don't declare one.
pub const DEFAULT_GLYPH: char = '█';

/// A grid position.
///
/// Coordinates are signed so callers can compute positions freely; only
/// [`Pos::in_bounds`] positions are ever drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when `0 <= x < WIDTH` and `0 <= y < HEIGHT`.
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < WIDTH as i32 && self.y < HEIGHT as i32
    }

    /// Row-major index into a `WIDTH x HEIGHT` grid, if in bounds.
    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        if !self.in_bounds() {
            return None;
        }
        Some((self.y as usize) * (WIDTH as usize) + (self.x as usize))
    }

    /// Offset by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The closed set of display colors.
///
/// Each tint maps to one of the eight standard ANSI colors on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tint {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
}

impl Tint {
    /// Tint used for entities the light barely reaches.
    pub const DARKEST: Tint = Tint::Black;

    /// Tint used for dimly lit entities.
    pub const MID: Tint = Tint::Blue;

    /// Band a brightness value into a display tint.
    ///
    /// There is no lower clamp: negative brightness lands in the darkest tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use fog2d_types::Tint;
    ///
    /// assert_eq!(Tint::for_brightness(-0.5, Tint::Green), Tint::Black);
    /// assert_eq!(Tint::for_brightness(0.2, Tint::Green), Tint::Blue);
    /// assert_eq!(Tint::for_brightness(0.5, Tint::Green), Tint::Green);
    /// ```
    pub fn for_brightness(brightness: f64, own: Tint) -> Tint {
        if brightness < DARK_THRESHOLD {
            Tint::DARKEST
        } else if brightness < DIM_THRESHOLD {
            Tint::MID
        } else {
            own
        }
    }
}
