//! Bounded Cache - a fixed-capacity in-memory key-value store
//!
//! Provides LRU eviction, optional per-entry TTL expiration with lazy
//! collection, and thread-safe wrappers (single-lock and sharded) with an
//! optional background sweep task.
//!
//! # Example
//! ```
//! use bounded_cache::BoundedCache;
//!
//! let mut cache = BoundedCache::new(2).unwrap();
//! cache.put(1, "a", None);
//! cache.put(2, "b", None);
//!
//! assert_eq!(cache.get(&1), Some(&"a")); // promotes key 1
//!
//! cache.put(3, "c", None); // evicts key 2, the least recently used
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.get(&3), Some(&"c"));
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod sync;
pub mod tasks;

pub use cache::{BoundedCache, CacheEntry, CacheStats, Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use sync::{ShardedCache, SharedCache};
pub use tasks::spawn_sweep_task;
