//! In-Memory Cache Backend
//!
//! Process-local implementation of [`PropertyCache`] used by the test suite
//! and for running the service without a Redis server. Entries expire lazily
//! on read; hit/miss counters mirror what Redis tracks in `INFO stats`.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheInfo, PropertyCache};
use crate::error::Result;
use crate::models::Property;

// == Cache Entry ==
/// A stored property list with its expiration timestamp (Unix milliseconds).
#[derive(Debug, Clone)]
struct CacheEntry {
    properties: Vec<Property>,
    expires_at: u64,
}

impl CacheEntry {
    fn new(properties: Vec<Property>, ttl_seconds: u64) -> Self {
        Self {
            properties,
            expires_at: current_timestamp_ms() + ttl_seconds * 1000,
        }
    }

    /// An entry is expired once the current time reaches its expiry.
    fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Inner State ==
#[derive(Debug, Default)]
struct MemoryCacheInner {
    entries: HashMap<String, CacheEntry>,
    keyspace_hits: u64,
    keyspace_misses: u64,
}

// == Memory Cache ==
/// In-process cache with per-entry TTL and cumulative keyspace counters.
#[derive(Debug, Default)]
pub struct MemoryCache {
    inner: RwLock<MemoryCacheInner>,
}

impl MemoryCache {
    /// Creates an empty cache with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertyCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<Property>>> {
        // Write lock: expired entries are dropped and counters updated
        let mut inner = self.inner.write().await;

        match inner.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let properties = entry.properties.clone();
                inner.keyspace_hits += 1;
                Ok(Some(properties))
            }
            Some(_) => {
                inner.entries.remove(key);
                inner.keyspace_misses += 1;
                Ok(None)
            }
            None => {
                inner.keyspace_misses += 1;
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, properties: &[Property], ttl_seconds: u64) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner
            .entries
            .insert(key.to_string(), CacheEntry::new(properties.to_vec(), ttl_seconds));
        Ok(())
    }

    async fn info(&self) -> Result<CacheInfo> {
        let inner = self.inner.read().await;
        Ok(CacheInfo {
            keyspace_hits: inner.keyspace_hits,
            keyspace_misses: inner.keyspace_misses,
        })
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
