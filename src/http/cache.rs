// Response cache with per-entry TTL (Time To Live)
// Avoids hitting rate-limited endpoints for data that rarely changes

use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cache entry with body, creation timestamp and its own TTL
#[derive(Clone)]
struct CacheEntry {
    body: Value,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn new(body: Value, ttl: Duration) -> Self {
        Self {
            body,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// Inserts between full sweeps of expired entries
const SWEEP_INTERVAL: usize = 64;

#[derive(Default)]
struct Entries {
    map: HashMap<String, CacheEntry>,
    inserts_since_sweep: usize,
}

impl Entries {
    /// Drop every expired entry, returning how many were removed
    fn sweep(&mut self) -> usize {
        let before = self.map.len();
        self.map.retain(|_, entry| !entry.is_expired());
        self.inserts_since_sweep = 0;
        before - self.map.len()
    }
}

/// Thread-safe cache of JSON response bodies keyed by request URL.
///
/// Expired entries are evicted when read and swept every `SWEEP_INTERVAL`
/// inserts, so the table is bounded by the live working set.
#[derive(Default)]
pub struct ResponseCache {
    entries: RwLock<Entries>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a body from cache if it exists and is not expired
    pub async fn get(&self, url: &str) -> Option<Value> {
        {
            let cache = self.entries.read().await;
            match cache.map.get(url) {
                Some(entry) if !entry.is_expired() => {
                    tracing::debug!("Cache hit for {}", url);
                    return Some(entry.body.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Re-checked under the write lock: another task may have refreshed it
        let mut cache = self.entries.write().await;
        if cache.map.get(url).is_some_and(CacheEntry::is_expired) {
            cache.map.remove(url);
            tracing::debug!("Evicted expired {}", url);
        }
        None
    }

    /// Store a body. A zero TTL is never stored.
    pub async fn insert(&self, url: &str, body: Value, ttl_secs: u64) {
        if ttl_secs == 0 {
            return;
        }
        let mut cache = self.entries.write().await;

        cache.inserts_since_sweep += 1;
        if cache.inserts_since_sweep >= SWEEP_INTERVAL {
            let removed = cache.sweep();
            if removed > 0 {
                tracing::debug!("Swept {} expired responses", removed);
            }
        }

        cache.map.insert(
            url.to_string(),
            CacheEntry::new(body, Duration::from_secs(ttl_secs)),
        );
        tracing::debug!("Cached {} for {}s", url, ttl_secs);
    }

    /// Remove all expired entries
    pub async fn cleanup_expired(&self) {
        let removed = self.entries.write().await.sweep();
        if removed > 0 {
            tracing::debug!("Cleaned up {} expired responses", removed);
        }
    }

    pub async fn clear_all(&self) {
        let mut cache = self.entries.write().await;
        cache.map.clear();
        cache.inserts_since_sweep = 0;
        tracing::debug!("Cleared response cache");
    }

    pub async fn stats(&self) -> CacheStats {
        let cache = self.entries.read().await;
        let expired = cache.map.values().filter(|e| e.is_expired()).count();
        CacheStats {
            entries: cache.map.len(),
            expired,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub expired: usize,
}
