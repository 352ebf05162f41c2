//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer for a fixed character grid.
//! Scenes draw into a back buffer; [`Renderer::present`] diffs it against the
//! front buffer and only sends changed cells to a [`Surface`].
//!
//! Goals:
//! - Keep terminal writes proportional to what changed, not to the grid size
//! - Keep the diffing pure so it can be tested against an in-memory surface
//! - Keep escape sequences behind the [`Surface`] capability

pub mod fb;
pub mod renderer;
pub mod splash;
pub mod surface;

pub use fog2d_core as core;
pub use fog2d_types as types;

pub use fb::{Cell, FrameBuffer};
pub use renderer::Renderer;
pub use splash::{draw_splash, splash_left, LOGO};
pub use surface::{Surface, TerminalSurface};
