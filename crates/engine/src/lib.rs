//! Engine loop.
//!
//! Drives a [`Scene`], a [`Renderer`] and an [`InputLatch`] at a fixed frame
//! rate until the [`Shutdown`] token is cancelled. Each frame runs, in order:
//!
//! 1. poll input once
//! 2. host logic (moves entities, may cancel)
//! 3. resolve collisions
//! 4. render the scene into the back buffer
//! 5. present the diff to the surface
//! 6. clear latched input
//! 7. sleep for one frame period
//!
//! The sleep is not shortened by the time the frame took, so a slow frame
//! lowers the effective rate instead of being caught up.
//!
//! [`Scene`]: fog2d_core::Scene
//! [`Renderer`]: fog2d_term::Renderer
//! [`InputLatch`]: fog2d_input::InputLatch

pub mod config;
pub mod engine;
pub mod shutdown;

pub use fog2d_core as core;
pub use fog2d_input as input;
pub use fog2d_term as term;
pub use fog2d_types as types;

pub use config::{ConfigError, EngineConfig};
pub use engine::Engine;
pub use shutdown::Shutdown;
