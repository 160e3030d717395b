//! External stop signal.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cloneable flag that ends a run at the next tick boundary.
///
/// The scheduler only reads it between ticks; a tick that has started always
/// completes.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the run stop before its next tick.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Re-arm the handle (used by `Sim::reset`).
    pub fn clear(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
