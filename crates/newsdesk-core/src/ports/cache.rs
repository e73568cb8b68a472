use std::time::Duration;

use async_trait::async_trait;

/// Cache port - small read-through cache for hot lookups such as the
/// landing-page featured post. Values are serialized strings; every entry
/// carries a TTL.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a live value, `None` on miss or expiry.
    async fn get(&self, key: &str) -> Option<String>;

    /// Store a value for `ttl`.
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Drop a key. Absent keys are not an error.
    async fn invalidate(&self, key: &str) -> Result<(), CacheError>;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Operation failed: {0}")]
    Operation(String),
}
