//! Key sources.
//!
//! A [`KeySource`] reports at most one key per poll and never blocks.

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{self, Event};

use crate::map::{key_name, normalize};

pub trait KeySource {
    /// The next pending key, normalized, or `None` when nothing is pending.
    fn poll_key(&mut self) -> Option<String>;
}

impl<F> KeySource for F
where
    F: FnMut() -> Option<String>,
{
    fn poll_key(&mut self) -> Option<String> {
        self()
    }
}

/// A source for platforms without a pollable keyboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullKeySource;

impl KeySource for NullKeySource {
    fn poll_key(&mut self) -> Option<String> {
        None
    }
}

/// Reads key events from the terminal via crossterm.
///
/// Only the first pending event is consumed per poll; anything else stays
/// queued for later frames. Poll or read failures degrade to "no key".
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermKeySource;

impl KeySource for CrosstermKeySource {
    fn poll_key(&mut self) -> Option<String> {
        match event::poll(Duration::ZERO) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                tracing::debug!(%err, "key poll failed");
                return None;
            }
        }

        match event::read() {
            Ok(Event::Key(key)) => key_name(key),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(%err, "key read failed");
                None
            }
        }
    }
}

/// Replays a fixed sequence of polls; `None` entries are frames without a key.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    script: VecDeque<Option<String>>,
}

impl ScriptedKeys {
    pub fn new<I, S>(script: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        Self {
            script: script
                .into_iter()
                .map(|k| k.map(|k| normalize(k.as_ref())))
                .collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Option<String> {
        self.script.pop_front().flatten()
    }
}
