//! Property Service
//!
//! Composes the backing store and the cache service behind the two public
//! operations: the cache-aside listing read and the metrics snapshot.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::cache::{CacheMetrics, PropertyCache, ALL_PROPERTIES_KEY};
use crate::error::Result;
use crate::models::{CreatePropertyRequest, Property};
use crate::store::PropertyStore;

// == Property Service ==
/// Stateless service over injected store and cache collaborators.
#[derive(Clone)]
pub struct PropertyService {
    store: Arc<dyn PropertyStore>,
    cache: Arc<dyn PropertyCache>,
    cache_ttl: u64,
}

impl PropertyService {
    // == Constructor ==
    /// Creates a service over the given collaborators.
    ///
    /// # Arguments
    /// * `store` - source of truth for property records
    /// * `cache` - cache service holding the listing under a fixed key
    /// * `cache_ttl` - lease duration in seconds for the cached listing
    pub fn new(store: Arc<dyn PropertyStore>, cache: Arc<dyn PropertyCache>, cache_ttl: u64) -> Self {
        Self {
            store,
            cache,
            cache_ttl,
        }
    }

    // == Cache-Aside Reader ==
    /// Returns all properties, reading through the cache.
    ///
    /// A cached listing (an empty one included) is returned unchanged. On a
    /// miss, the full record set is fetched from the store and cached under
    /// the fixed key with the configured TTL. Store and cache failures
    /// propagate; concurrent misses may each hit the store and overwrite the
    /// entry redundantly. The entry is not refreshed by later store writes
    /// until its lease expires.
    pub async fn get_all_properties(&self) -> Result<Vec<Property>> {
        if let Some(cached) = self.cache.get(ALL_PROPERTIES_KEY).await? {
            debug!("cache hit for '{}' ({} records)", ALL_PROPERTIES_KEY, cached.len());
            return Ok(cached);
        }

        debug!("cache miss for '{}', reading store", ALL_PROPERTIES_KEY);
        let properties = self.store.fetch_all().await?;

        self.cache
            .set(ALL_PROPERTIES_KEY, &properties, self.cache_ttl)
            .await?;

        Ok(properties)
    }

    // == Metrics Reporter ==
    /// Reports the cache server's cumulative hit/miss statistics.
    ///
    /// Never fails: any error collecting the counters is logged and folded
    /// into a zeroed snapshot carrying the error message.
    pub async fn cache_metrics(&self) -> CacheMetrics {
        match self.cache.info().await {
            Ok(counters) => {
                let metrics =
                    CacheMetrics::from_counters(counters.keyspace_hits, counters.keyspace_misses);
                info!(
                    "cache metrics: hits={} misses={} total={} hit_ratio={} miss_ratio={}",
                    metrics.keyspace_hits,
                    metrics.keyspace_misses,
                    metrics.total_requests,
                    metrics.hit_ratio,
                    metrics.miss_ratio
                );
                metrics
            }
            Err(e) => {
                error!("failed to collect cache metrics: {e}");
                CacheMetrics::unavailable(e.to_string())
            }
        }
    }

    // == Create ==
    /// Inserts a new property into the backing store.
    ///
    /// The cached listing is deliberately left alone; it stays stale until
    /// its lease expires.
    pub async fn create_property(&self, request: CreatePropertyRequest) -> Result<Property> {
        self.store.insert(request).await
    }
}
