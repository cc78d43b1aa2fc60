//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and timing metadata.
///
/// All instants are produced by the owning cache's clock, so expiration
/// checks stay consistent under a simulated clock.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Instant the entry was created or last overwritten
    pub created_at: Instant,
    /// Instant the entry was last read or written
    pub touched_at: Instant,
    /// Expiration deadline, None = no expiration
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry with optional TTL.
    ///
    /// A TTL so large that the deadline is not representable is treated
    /// as no expiration.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `now` - Current instant from the cache clock
    /// * `ttl` - Optional time to live
    pub fn new(value: V, now: Instant, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.and_then(|ttl| now.checked_add(ttl));

        Self {
            value,
            created_at: now,
            touched_at: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now`.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration deadline, so a
    /// zero-duration TTL expires immediately.
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns the remaining TTL as of `now`, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(Duration::ZERO)` if the entry has expired
    /// - `Some(remaining)` if the entry has a TTL and has not expired
    /// - `None` if the entry has no TTL (never expires)
    pub fn ttl_remaining(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(now))
    }
}
