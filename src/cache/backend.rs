//! Cache Backend Trait
//!
//! Defines the seam between the service and whichever cache server backs it.
//! Implementations must support atomic get/set of a single key plus an info
//! block carrying the server's cumulative keyspace counters.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Property;

// == Cache Info ==
/// Cumulative keyspace counters reported by the cache server.
///
/// Counters missing from the server's info block default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheInfo {
    /// Lookups satisfied from cache
    pub keyspace_hits: u64,
    /// Lookups that fell through
    pub keyspace_misses: u64,
}

// == Property Cache Trait ==
/// Key-value cache holding property lists under a time-limited lease.
#[async_trait]
pub trait PropertyCache: Send + Sync {
    /// Looks up a cached property list by key.
    ///
    /// Returns `Ok(None)` on a miss. An empty list is a valid cached value
    /// and comes back as `Ok(Some(vec![]))`.
    async fn get(&self, key: &str) -> Result<Option<Vec<Property>>>;

    /// Stores a property list under `key`, expiring after `ttl_seconds`.
    ///
    /// Overwrites any existing entry and resets its lease.
    async fn set(&self, key: &str, properties: &[Property], ttl_seconds: u64) -> Result<()>;

    /// Fetches the server's cumulative hit/miss counters.
    async fn info(&self) -> Result<CacheInfo>;
}
