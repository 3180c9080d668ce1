//! Cooperative shutdown flag.
//!
//! Signal handlers never touch controller state directly: SIGINT/SIGTERM
//! merely set this flag, and the control loop observes it at tick
//! boundaries. Cancellation latency is therefore bounded by one tick
//! (sensor read + sleep).

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use signal_hook::consts::{SIGINT, SIGTERM};

/// Cloneable handle to the process-wide shutdown request.
///
/// Transitions false→true exactly once; there is no way to clear it.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown. Safe to call from a signal handler context.
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether shutdown has been requested.
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Route SIGINT and SIGTERM into `flag`.
pub fn register_signals(flag: &ShutdownFlag) -> io::Result<()> {
    for sig in [SIGINT, SIGTERM] {
        signal_hook::flag::register(sig, Arc::clone(&flag.0))?;
    }
    Ok(())
}
