//! In-memory cache for hot read paths (the landing featured post).

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use newsdesk_core::ports::{Cache, CacheError};

struct Entry {
    value: String,
    expires_at: Instant,
}

/// Process-local cache with per-entry TTLs.
///
/// Entries are dropped lazily: an expired entry is removed when the key is
/// next read. Data does not survive a restart, which is fine for the short
/// TTLs this is used with.
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }
        // Expired: upgrade to a write lock and drop the entry.
        self.entries.write().await.remove(key);
        None
    }

    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get() {
        let cache = InMemoryCache::new();
        cache
            .put("k", "v", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cache.get("k").await, Some("v".to_string()));
    }

    #[tokio::test]
    async fn expired_entries_miss() {
        let cache = InMemoryCache::new();
        cache.put("k", "v", Duration::ZERO).await.unwrap();
        assert_eq!(cache.get("k").await, None);
    }

    #[tokio::test]
    async fn invalidate_removes() {
        let cache = InMemoryCache::new();
        cache
            .put("k", "v", Duration::from_secs(60))
            .await
            .unwrap();
        cache.invalidate("k").await.unwrap();
        assert_eq!(cache.get("k").await, None);
    }

    #[tokio::test]
    async fn invalidate_missing_key_is_ok() {
        let cache = InMemoryCache::new();
        assert!(cache.invalidate("absent").await.is_ok());
    }
}
