//! Keyboard input module (engine-facing).
//!
//! This module is intentionally independent of any game logic. A [`KeySource`]
//! is polled without blocking; the [`InputLatch`] collects the normalized keys
//! it reports until the end of the frame. Sources are injected, so the host
//! decides at startup whether to read the terminal, replay a script, or read
//! nothing at all.

pub mod latch;
pub mod map;
pub mod source;

pub use latch::InputLatch;
pub use map::{key_name, normalize};
pub use source::{CrosstermKeySource, KeySource, NullKeySource, ScriptedKeys};
