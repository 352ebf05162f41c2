//! Per-frame pressed-key set.

use std::collections::HashSet;

use crate::map::normalize;
use crate::source::{KeySource, NullKeySource};

/// Collects keys reported by a [`KeySource`] until cleared.
///
/// Each [`InputLatch::update`] polls the source once, so at most one key is
/// captured per call even if the source has several pending.
pub struct InputLatch {
    source: Box<dyn KeySource>,
    pressed: HashSet<String>,
}

impl Default for InputLatch {
    fn default() -> Self {
        Self::new(NullKeySource)
    }
}

impl InputLatch {
    pub fn new(source: impl KeySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            pressed: HashSet::new(),
        }
    }

    /// Poll the source once and latch the key it reports, if any.
    /// An empty identifier counts as no key.
    pub fn update(&mut self) {
        match self.source.poll_key() {
            Some(key) if !key.is_empty() => {
                self.pressed.insert(normalize(&key));
            }
            _ => {}
        }
    }

    /// Case-insensitive membership test.
    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(&normalize(key))
    }

    pub fn any_pressed(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_pressed(k))
    }

    pub fn pressed(&self) -> impl Iterator<Item = &str> {
        self.pressed.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
