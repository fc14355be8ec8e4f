//! In-memory snapshot cache with per-entry expiry
//!
//! Provides a `CacheManager` holding values of one type keyed by string, each
//! with its own time-to-live. Values are shared as `Arc<T>` and replaced
//! wholesale on refresh, never mutated in place.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;
use tracing::debug;

/// A stored value and its timestamps
struct CacheEntry<T> {
    /// The cached data
    data: Arc<T>,
    /// When the data was cached
    cached_at: DateTime<Utc>,
    /// When the cache entry expires
    expires_at: Instant,
}

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug)]
pub struct CachedData<T> {
    /// The cached data
    pub data: Arc<T>,
    /// When the data was originally cached
    pub cached_at: DateTime<Utc>,
    /// Whether the cache entry has expired
    pub is_expired: bool,
}

/// Key/value store with per-entry TTL
///
/// The lock is only held for map access and never across an `.await`, so a
/// compute that is cancelled halfway leaves the cache untouched. Concurrent
/// misses on the same key may each run their compute; the last one to finish
/// wins.
pub struct CacheManager<T> {
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
}

impl<T> Default for CacheManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CacheManager<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Reads an entry from the cache
    ///
    /// Returns `None` if the key was never written.
    /// Expired entries are still returned, with `is_expired = true`.
    pub fn read(&self, key: &str) -> Option<CachedData<T>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let entry = entries.get(key)?;

        Some(CachedData {
            data: Arc::clone(&entry.data),
            cached_at: entry.cached_at,
            is_expired: Instant::now() >= entry.expires_at,
        })
    }

    /// Stores `data` under `key` for `ttl`, replacing any previous value
    ///
    /// Returns the shared handle to the stored value.
    pub fn write(&self, key: &str, data: T, ttl: Duration) -> Arc<T> {
        let data = Arc::new(data);
        let entry = CacheEntry {
            data: Arc::clone(&data),
            cached_at: Utc::now(),
            expires_at: Instant::now() + ttl,
        };

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), entry);
        data
    }

    /// Returns the fresh value for `key`, or runs `compute` and stores its result
    ///
    /// An error from `compute` is returned as-is and nothing is stored, so a
    /// failed fetch never shadows a later successful one.
    pub async fn get_or_compute<F, Fut, E>(
        &self,
        key: &str,
        ttl: Duration,
        compute: F,
    ) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(cached) = self.read(key) {
            if !cached.is_expired {
                debug!(key, "cache hit");
                return Ok(cached.data);
            }
            debug!(key, cached_at = %cached.cached_at, "cache entry expired");
        } else {
            debug!(key, "cache miss");
        }

        let data = compute().await?;
        Ok(self.write(key, data, ttl))
    }
}
