//! Shared Cache Module
//!
//! Single-lock concurrent wrapper: one `tokio::sync::RwLock` guards both
//! the hash index and the recency order, so all operations are strictly
//! ordered by lock acquisition.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{BoundedCache, CacheStats, Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle to a lock-guarded [`BoundedCache`].
///
/// Values are returned by clone so no lock is held across await points by
/// callers. Reads still take the write lock: a successful `get` mutates
/// recency order and statistics.
#[derive(Debug)]
pub struct SharedCache<K, V, C = SystemClock> {
    inner: Arc<RwLock<BoundedCache<K, V, C>>>,
}

// Manual impl: handle clones must not require K/V/C to be Clone
impl<K, V, C> Clone for SharedCache<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone> SharedCache<K, V> {
    // == Constructor ==
    /// Creates a new shared cache with the given capacity and no default TTL.
    ///
    /// # Errors
    /// Returns [`crate::error::CacheError::InvalidArgument`] if `capacity`
    /// is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_cache(BoundedCache::new(capacity)?))
    }

    /// Creates a new shared cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Ok(Self::from_cache(BoundedCache::from_config(config)?))
    }
}

impl<K: Hash + Eq + Clone, V: Clone, C: Clock> SharedCache<K, V, C> {
    /// Wraps an already constructed cache.
    pub fn from_cache(cache: BoundedCache<K, V, C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    // == Put ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// Returns the prior live value if the key was already present.
    pub async fn put(&self, key: K, value: V, ttl: Option<Duration>) -> Option<V> {
        let mut cache = self.inner.write().await;
        cache.put(key, value, ttl)
    }

    // == Get ==
    /// Retrieves a clone of the value, marking the key most recently used.
    pub async fn get(&self, key: &K) -> Option<V> {
        // Write lock: get updates recency order and statistics
        let mut cache = self.inner.write().await;
        cache.get(key).cloned()
    }

    // == Peek ==
    /// Retrieves a clone of the value without recency or stat side effects.
    pub async fn peek(&self, key: &K) -> Option<V> {
        let cache = self.inner.read().await;
        cache.peek(key).cloned()
    }

    // == Remove ==
    /// Removes an entry, returning its live value. Idempotent.
    pub async fn remove(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.write().await;
        cache.remove(key)
    }

    // == Contains Key ==
    /// Checks whether a live entry exists, without promoting it.
    pub async fn contains_key(&self, key: &K) -> bool {
        let cache = self.inner.read().await;
        cache.contains_key(key)
    }

    // == Length ==
    /// Returns the number of live entries.
    pub async fn len(&self) -> usize {
        let cache = self.inner.read().await;
        cache.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        let cache = self.inner.read().await;
        cache.is_empty()
    }

    // == TTL Remaining ==
    /// Returns the remaining TTL for a live entry.
    pub async fn ttl_remaining(&self, key: &K) -> Option<Duration> {
        let cache = self.inner.read().await;
        cache.ttl_remaining(key)
    }

    // == Purge Expired ==
    /// Eagerly removes all expired entries, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut cache = self.inner.write().await;
        cache.purge_expired()
    }

    // == Clear ==
    /// Removes all entries.
    pub async fn clear(&self) {
        let mut cache = self.inner.write().await;
        cache.clear();
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let cache = self.inner.read().await;
        cache.stats()
    }
}
