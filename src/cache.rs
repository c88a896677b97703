use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// A cache entry with its expiration time
pub struct CacheEntry<T> {
    pub data: T,
    pub expires_at: Instant,
}

/// A generic key/value cache with TTL eviction. Held in shared state and
/// injected into callers instead of living as hidden module-level maps.
pub struct TimedCache<T> {
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    ttl: Duration,
}

impl<T: Clone + Send + Sync> TimedCache<T> {
    /// Create a new cache with the specified TTL in seconds
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Get a value from the cache if it exists and hasn't expired
    pub async fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        if let Some(entry) = entries.get(key) {
            if Instant::now() < entry.expires_at {
                return Some(entry.data.clone());
            }
        }
        None
    }

    /// Store a value in the cache with the configured TTL
    pub async fn set(&self, key: &str, value: T) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                data: value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Remove a specific key from the cache
    pub async fn invalidate(&self, key: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }

    /// Drop all expired entries, returning how many were evicted
    pub async fn sweep(&self) -> usize {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    /// Number of entries currently held, expired or not
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl<T> std::fmt::Debug for TimedCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let cache = TimedCache::new(60);
        cache.set("a", 1_i64).await;

        assert_eq!(cache.get("a").await, Some(1));
        assert_eq!(cache.get("b").await, None);
    }

    #[tokio::test]
    async fn zero_ttl_entries_are_already_expired() {
        let cache = TimedCache::new(0);
        cache.set("a", 1_i64).await;

        assert_eq!(cache.get("a").await, None);
    }

    #[tokio::test]
    async fn sweep_drops_only_expired_entries() {
        let cache = TimedCache::new(0);
        cache.set("a", 1_i64).await;
        cache.set("b", 2_i64).await;
        assert_eq!(cache.entry_count().await, 2);

        let evicted = cache.sweep().await;
        assert_eq!(evicted, 2);
        assert_eq!(cache.entry_count().await, 0);

        let cache = TimedCache::new(60);
        cache.set("a", 1_i64).await;
        assert_eq!(cache.sweep().await, 0);
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn invalidate_removes_a_single_key() {
        let cache = TimedCache::new(60);
        cache.set("a", 1_i64).await;
        cache.set("b", 2_i64).await;

        cache.invalidate("a").await;

        assert_eq!(cache.get("a").await, None);
        assert_eq!(cache.get("b").await, Some(2));
    }
}
