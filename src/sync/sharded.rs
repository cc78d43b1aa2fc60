//! Sharded Cache Module
//!
//! Concurrent cache that splits the key space across N independent
//! lock-guarded shards to reduce contention. LRU order and strict
//! operation ordering hold per shard only; there is no global recency
//! order across shards.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{BoundedCache, CacheStats, Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

/// Shards plus the hasher that routes keys to them. Kept behind one Arc so
/// every handle routes identically.
#[derive(Debug)]
struct Inner<K, V, C> {
    shards: Vec<RwLock<BoundedCache<K, V, C>>>,
    hasher: RandomState,
}

// == Sharded Cache ==
/// Cloneable handle to a cache sharded by key hash.
///
/// The total capacity is divided evenly across shards (rounding up), so
/// the effective capacity is `ceil(capacity / shards) * shards`. A skewed
/// key distribution can evict from a hot shard while other shards have
/// room; callers needing an exact global bound should use
/// [`SharedCache`](crate::sync::SharedCache).
#[derive(Debug)]
pub struct ShardedCache<K, V, C = SystemClock> {
    inner: Arc<Inner<K, V, C>>,
}

impl<K, V, C> Clone for ShardedCache<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone> ShardedCache<K, V> {
    // == Constructor ==
    /// Creates a sharded cache with `capacity` total entries spread over
    /// `shards` independent shards.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidArgument`] if `capacity` or `shards`
    /// is zero.
    pub fn new(capacity: usize, shards: usize) -> Result<Self> {
        Self::with_clock(capacity, shards, None, SystemClock)
    }

    /// Creates a sharded cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::with_clock(
            config.capacity,
            config.shards,
            config.default_ttl,
            SystemClock,
        )
    }
}

impl<K: Hash + Eq + Clone, V: Clone, C: Clock + Clone> ShardedCache<K, V, C> {
    /// Creates a sharded cache with an injected clock shared by all shards.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidArgument`] if `capacity` or `shards`
    /// is zero.
    pub fn with_clock(
        capacity: usize,
        shards: usize,
        default_ttl: Option<Duration>,
        clock: C,
    ) -> Result<Self> {
        if shards == 0 {
            return Err(CacheError::InvalidArgument(
                "shard count must be greater than zero".to_string(),
            ));
        }

        let per_shard = capacity.div_ceil(shards);
        let mut built = Vec::with_capacity(shards);
        for _ in 0..shards {
            built.push(RwLock::new(BoundedCache::with_clock(
                per_shard,
                default_ttl,
                clock.clone(),
            )?));
        }

        Ok(Self {
            inner: Arc::new(Inner {
                shards: built,
                hasher: RandomState::new(),
            }),
        })
    }
}

impl<K: Hash + Eq + Clone, V: Clone, C: Clock> ShardedCache<K, V, C> {
    /// Returns the number of shards.
    pub fn num_shards(&self) -> usize {
        self.inner.shards.len()
    }

    /// Routes a key to its shard.
    fn shard_for(&self, key: &K) -> &RwLock<BoundedCache<K, V, C>> {
        let index = self.inner.hasher.hash_one(key) as usize % self.inner.shards.len();
        &self.inner.shards[index]
    }

    // == Put ==
    /// Stores a key-value pair in the key's shard, returning the prior
    /// live value if the key was already present.
    pub async fn put(&self, key: K, value: V, ttl: Option<Duration>) -> Option<V> {
        let shard = self.shard_for(&key);
        let mut cache = shard.write().await;
        cache.put(key, value, ttl)
    }

    // == Get ==
    /// Retrieves a clone of the value, marking the key most recently used
    /// within its shard.
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.shard_for(key).write().await;
        cache.get(key).cloned()
    }

    // == Peek ==
    /// Retrieves a clone of the value without recency or stat side effects.
    pub async fn peek(&self, key: &K) -> Option<V> {
        let cache = self.shard_for(key).read().await;
        cache.peek(key).cloned()
    }

    // == Remove ==
    /// Removes an entry from its shard, returning its live value. Idempotent.
    pub async fn remove(&self, key: &K) -> Option<V> {
        let mut cache = self.shard_for(key).write().await;
        cache.remove(key)
    }

    // == Contains Key ==
    /// Checks whether a live entry exists, without promoting it.
    pub async fn contains_key(&self, key: &K) -> bool {
        let cache = self.shard_for(key).read().await;
        cache.contains_key(key)
    }

    // == Length ==
    /// Returns the number of live entries across all shards.
    ///
    /// Shards are inspected one at a time, so the result is a point-in-time
    /// approximation under concurrent writes.
    pub async fn len(&self) -> usize {
        let mut total = 0;
        for shard in &self.inner.shards {
            total += shard.read().await.len();
        }
        total
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // == Purge Expired ==
    /// Eagerly removes expired entries from every shard, returning the
    /// total removed.
    pub async fn purge_expired(&self) -> usize {
        let mut total = 0;
        for shard in &self.inner.shards {
            total += shard.write().await.purge_expired();
        }
        total
    }

    // == Clear ==
    /// Removes all entries from every shard.
    pub async fn clear(&self) {
        for shard in &self.inner.shards {
            shard.write().await.clear();
        }
    }

    // == Stats ==
    /// Returns statistics aggregated over all shards.
    pub async fn stats(&self) -> CacheStats {
        let mut total = CacheStats::new();
        for shard in &self.inner.shards {
            total.merge(&shard.read().await.stats());
        }
        total
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sharded_zero_shards_rejected() {
        let result: Result<ShardedCache<String, String>> = ShardedCache::new(100, 0);
        assert!(matches!(result, Err(CacheError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_sharded_put_and_get() {
        // 32 entries per shard: no skew of 32 keys can trigger eviction
        let cache: ShardedCache<String, String> = ShardedCache::new(128, 4).unwrap();

        for i in 0..32 {
            cache.put(format!("key{i}"), format!("value{i}"), None).await;
        }

        for i in 0..32 {
            assert_eq!(
                cache.get(&format!("key{i}")).await,
                Some(format!("value{i}"))
            );
        }
        assert_eq!(cache.len().await, 32);
    }

    #[tokio::test]
    async fn test_sharded_remove_idempotent() {
        let cache: ShardedCache<String, u32> = ShardedCache::new(16, 4).unwrap();

        cache.put("key".to_string(), 7, None).await;
        assert_eq!(cache.remove(&"key".to_string()).await, Some(7));
        assert_eq!(cache.remove(&"key".to_string()).await, None);
    }

    #[tokio::test]
    async fn test_sharded_handles_route_identically() {
        let cache: ShardedCache<String, u32> = ShardedCache::new(16, 4).unwrap();
        let handle = cache.clone();

        cache.put("key".to_string(), 1, None).await;

        assert_eq!(handle.get(&"key".to_string()).await, Some(1));
    }

    #[tokio::test]
    async fn test_sharded_stats_aggregation() {
        let cache: ShardedCache<String, u32> = ShardedCache::new(128, 4).unwrap();

        for i in 0..16 {
            cache.put(format!("key{i}"), i, None).await;
        }
        for i in 0..16 {
            cache.get(&format!("key{i}")).await;
        }
        cache.get(&"missing".to_string()).await;

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 16);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.live_entries, 16);
    }

    #[tokio::test]
    async fn test_sharded_concurrent_access() {
        let cache: ShardedCache<u32, u32> = ShardedCache::new(256, 8).unwrap();

        let mut handles = Vec::new();
        for task in 0..8u32 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..100u32 {
                    let key = task * 100 + i;
                    cache.put(key, key, None).await;
                    assert_eq!(cache.get(&key).await, Some(key));
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        // 800 distinct keys through a 256-capacity cache: every shard
        // stays within its per-shard bound
        assert!(cache.len().await <= 256);
    }
}
