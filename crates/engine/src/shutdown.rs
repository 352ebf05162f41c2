//! Cooperative cancellation for the engine loop.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable stop flag checked once per frame boundary.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    flag: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Cancel on SIGINT or SIGTERM.
    #[cfg(unix)]
    pub fn register_signals(&self) -> io::Result<()> {
        use signal_hook::consts::{SIGINT, SIGTERM};

        signal_hook::flag::register(SIGINT, Arc::clone(&self.flag))?;
        signal_hook::flag::register(SIGTERM, Arc::clone(&self.flag))?;
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn register_signals(&self) -> io::Result<()> {
        Ok(())
    }
}
