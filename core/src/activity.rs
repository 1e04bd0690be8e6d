//! In-flight request counter for activity indicators.
//!
//! The count is advisory and never affects the pipeline's result. Slots are
//! released by `ActivityGuard::drop`, so a call that succeeds, fails, or is
//! cancelled mid-flight gives its slot back exactly once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared count of requests currently on the wire.
#[derive(Debug, Clone, Default)]
pub struct ActivityCounter {
    in_flight: Arc<AtomicUsize>,
}

impl ActivityCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one request as started. The slot is held until the guard drops.
    pub fn begin(&self) -> ActivityGuard {
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(in_flight, "network activity began");
        ActivityGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn is_active(&self) -> bool {
        self.in_flight() > 0
    }
}

/// Holds one in-flight slot of an `ActivityCounter`.
#[derive(Debug)]
#[must_use = "the request is counted as finished as soon as the guard drops"]
pub struct ActivityGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        let in_flight = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
        tracing::trace!(in_flight, "network activity ended");
    }
}
