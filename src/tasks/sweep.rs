//! TTL Sweep Task
//!
//! Optional background task that periodically removes expired cache
//! entries. Expiration works lazily without it; the sweep only bounds how
//! long expired-but-present entries linger in storage. It mutates the
//! cache through the same lock as every other operation.

use std::hash::Hash;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Clock;
use crate::sync::SharedCache;

/// Spawns a background task that periodically purges expired entries.
///
/// The task loops forever, sleeping for `interval` between sweeps. Each
/// sweep takes the cache's write lock for the duration of the purge.
///
/// # Returns
/// A JoinHandle for the spawned task; abort it during shutdown.
///
/// # Example
/// ```ignore
/// let cache: SharedCache<String, String> = SharedCache::new(1000)?;
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<K, V, C>(cache: SharedCache<K, V, C>, interval: Duration) -> JoinHandle<()>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("Starting TTL sweep task with interval of {:?}", interval);

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let cache: SharedCache<String, String> = SharedCache::new(100).unwrap();

        // Add an entry with a very short TTL
        cache
            .put(
                "expire_soon".to_string(),
                "value".to_string(),
                Some(Duration::from_millis(50)),
            )
            .await;

        // Sweep frequently enough to collect it without any access
        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(cache.peek(&"expire_soon".to_string()).await, None);
        assert_eq!(cache.stats().await.expirations, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_valid_entries() {
        let cache: SharedCache<String, String> = SharedCache::new(100).unwrap();

        // Add an entry with a long TTL
        cache
            .put(
                "long_lived".to_string(),
                "value".to_string(),
                Some(Duration::from_secs(3600)),
            )
            .await;

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(
            cache.get(&"long_lived".to_string()).await,
            Some("value".to_string()),
            "Valid entry should not be removed"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache: SharedCache<String, String> = SharedCache::new(100).unwrap();

        let handle = spawn_sweep_task(cache, Duration::from_millis(20));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
