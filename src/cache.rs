//! In-memory response caching with a fixed TTL.
//!
//! Each route keeps one [`TtlCache`] holding the last successful result and the
//! instant it was stored. Failed refreshes are never cached.

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    cached_at: Instant,
}

/// Single-slot cache whose entry expires `ttl` after it was stored.
#[derive(Debug)]
pub struct TtlCache<T> {
    entry: RwLock<Option<Entry<T>>>,
    ttl: Duration,
}

impl<T: Clone> TtlCache<T> {
    /// Create an empty cache. A zero `ttl` disables caching.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl,
        }
    }

    /// The cached value, if present and not expired.
    pub async fn get(&self) -> Option<T> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|entry| entry.cached_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    /// Store `value`, replacing any previous entry.
    pub async fn put(&self, value: T) {
        *self.entry.write().await = Some(Entry {
            value,
            cached_at: Instant::now(),
        });
    }

    /// Return the cached value or run `refresh`, caching its result on success.
    ///
    /// # Errors
    ///
    /// Returns the error from `refresh`; the previous entry is left untouched.
    pub async fn get_or_refresh<F, Fut, E>(&self, refresh: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get().await {
            return Ok(value);
        }

        let fresh = refresh().await?;
        self.put(fresh.clone()).await;
        Ok(fresh)
    }
}
