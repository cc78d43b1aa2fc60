//! Clock Abstraction Module
//!
//! Time source used for TTL expiration, injectable so tests can advance
//! time without sleeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

// == Clock Trait ==
/// Source of the current instant for expiration checks.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

// == System Clock ==
/// Default clock backed by `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

// == Manual Clock ==
/// A manually advanced clock for tests and simulations.
///
/// Clones share the same underlying time: advancing through any handle is
/// observed by all of them.
#[derive(Debug, Clone)]
pub struct ManualClock {
    /// Reference instant that offsets are applied to
    epoch: Instant,
    /// Milliseconds elapsed since the epoch, shared across clones
    elapsed_ms: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a new manual clock starting at the current instant.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            elapsed_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Advances the clock by the given duration.
    pub fn advance(&self, by: Duration) {
        self.elapsed_ms
            .fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.epoch + Duration::from_millis(self.elapsed_ms.load(Ordering::SeqCst))
    }
}
