//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with O(1) recency tracking
//! and TTL expiration.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use crate::cache::recency::RecencyList;
use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Bounded Cache ==
/// Fixed-capacity key-value cache with LRU eviction and optional TTL.
///
/// Entries are stored in a HashMap; recency order lives in a separate
/// doubly-linked list of keys with its own key-to-node index, giving O(1)
/// get/put/remove. Expired entries are collected lazily on access (or
/// eagerly via [`purge_expired`](Self::purge_expired)).
///
/// This type is single-threaded and unsynchronized. For concurrent access
/// see the wrappers in [`crate::sync`].
#[derive(Debug)]
pub struct BoundedCache<K, V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Recency order over the stored keys
    recency: RecencyList<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// TTL applied when `put` is called without one, None = never expire
    default_ttl: Option<Duration>,
    /// Time source for expiration checks
    clock: C,
}

impl<K: Hash + Eq + Clone, V> BoundedCache<K, V> {
    // == Constructor ==
    /// Creates a new cache with the specified capacity and no default TTL.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_clock(capacity, None, SystemClock)
    }

    /// Creates a new cache where entries stored without an explicit TTL
    /// expire after `default_ttl`.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidArgument`] if `capacity` is zero.
    pub fn with_default_ttl(capacity: usize, default_ttl: Duration) -> Result<Self> {
        Self::with_clock(capacity, Some(default_ttl), SystemClock)
    }

    /// Creates a new cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::with_clock(config.capacity, config.default_ttl, SystemClock)
    }
}

impl<K: Hash + Eq + Clone, V, C: Clock> BoundedCache<K, V, C> {
    /// Creates a new cache with an injected clock.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidArgument`] if `capacity` is zero.
    pub fn with_clock(capacity: usize, default_ttl: Option<Duration>, clock: C) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidArgument(
                "capacity must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            recency: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
            default_ttl,
            clock,
        })
    }

    // == Put ==
    /// Stores a key-value pair with optional TTL, returning the prior live
    /// value if the key was already present.
    ///
    /// Writing an existing key refreshes everything: value, TTL, and
    /// recency ("refresh on write"). If the cache is full and the key is
    /// new, the least recently used entry is evicted first. When `ttl` is
    /// None the cache-wide default TTL applies, if one was configured.
    pub fn put(&mut self, key: K, value: V, ttl: Option<Duration>) -> Option<V> {
        let now = self.clock.now();
        let effective_ttl = ttl.or(self.default_ttl);

        // Evict only for new keys; overwrites never change the entry count
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_lru();
        }

        let entry = CacheEntry::new(value, now, effective_ttl);
        let prior = self.entries.insert(key.clone(), entry);
        self.recency.touch(&key);

        match prior {
            Some(old) if old.is_expired(now) => {
                // The stale value was logically absent already
                self.stats.record_expiration();
                None
            }
            Some(old) => Some(old.value),
            None => None,
        }
    }

    // == Get ==
    /// Retrieves a value by key, marking it most recently used.
    ///
    /// Returns None if the key is absent or expired. An expired entry is
    /// removed as a side effect (lazy expiration) and counted as a miss.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let now = self.clock.now();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.recency.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            return None;
        }

        self.recency.touch(key);
        self.stats.record_hit();
        self.entries.get_mut(key).map(|entry| {
            entry.touched_at = now;
            &entry.value
        })
    }

    // == Peek ==
    /// Returns the value for `key` without updating recency or statistics.
    ///
    /// An expired entry reads as absent but is left in place (removal
    /// happens on the next mutating access or sweep).
    pub fn peek(&self, key: &K) -> Option<&V> {
        let now = self.clock.now();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| &entry.value)
    }

    // == Contains Key ==
    /// Checks whether a live (non-expired) entry exists, without promoting it.
    pub fn contains_key(&self, key: &K) -> bool {
        self.peek(key).is_some()
    }

    // == Remove ==
    /// Removes an entry by key, returning its live value if present.
    ///
    /// Idempotent: removing an absent key is a no-op that returns None.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let now = self.clock.now();
        match self.entries.remove(key) {
            Some(entry) => {
                self.recency.remove(key);
                if entry.is_expired(now) {
                    self.stats.record_expiration();
                    None
                } else {
                    Some(entry.value)
                }
            }
            None => None,
        }
    }

    // == TTL Remaining ==
    /// Returns the remaining TTL for a live entry.
    ///
    /// None means the key is absent, expired, or has no expiration.
    pub fn ttl_remaining(&self, key: &K) -> Option<Duration> {
        let now = self.clock.now();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .and_then(|entry| entry.ttl_remaining(now))
    }

    // == Purge Expired ==
    /// Eagerly removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let expired_keys: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.recency.remove(&key);
            self.stats.record_expiration();
        }

        count
    }

    // == Length ==
    /// Returns the number of live (non-expired) entries.
    ///
    /// Expiration accounting is lazy in storage but eager in counting:
    /// expired-but-present entries are excluded by inspecting their
    /// deadline at call time, which makes this O(n) when a default or
    /// per-entry TTL is in use.
    pub fn len(&self) -> usize {
        let now = self.clock.now();
        self.entries
            .values()
            .filter(|entry| !entry.is_expired(now))
            .count()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Capacity ==
    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the TTL applied to entries stored without an explicit one.
    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }

    // == Clear ==
    /// Removes all entries. Statistics counters are preserved.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_live_entries(self.len());
        stats
    }

    // == Internal ==
    /// Drops the least recently used entry to make room for an insert.
    fn evict_lru(&mut self) {
        let now = self.clock.now();
        if let Some(victim) = self.recency.pop_lru() {
            if let Some(entry) = self.entries.remove(&victim) {
                // An already expired victim counts as a collected
                // expiration rather than a capacity eviction
                if entry.is_expired(now) {
                    self.stats.record_expiration();
                } else {
                    self.stats.record_eviction();
                }
            }
        }
    }
}
