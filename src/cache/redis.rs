//! Redis Cache Backend
//!
//! Talks to a real Redis server through a deadpool connection pool. Property
//! lists are stored as JSON strings with a per-key expiry (SETEX); keyspace
//! counters come from the `INFO stats` block.

use async_trait::async_trait;
use deadpool_redis::{Config as PoolConfig, Pool, Runtime};
use redis::AsyncCommands;

use crate::cache::{CacheInfo, PropertyCache};
use crate::error::{Result, ServiceError};
use crate::models::Property;

// == Redis Cache ==
/// Redis-backed implementation of [`PropertyCache`].
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    // == Constructor ==
    /// Creates a cache client for the given Redis URL.
    ///
    /// Pool creation is lazy: no connection is attempted until the first
    /// operation, so the service starts even while Redis is down and the
    /// metrics reporter degrades to its error snapshot.
    pub fn connect(redis_url: &str) -> Result<Self> {
        let pool = PoolConfig::from_url(redis_url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| ServiceError::Connection(format!("failed to create Redis pool: {e}")))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PropertyCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<Property>>> {
        let mut conn = self.pool.get().await?;
        let raw: Option<String> = conn.get(key).await?;

        match raw {
            Some(payload) => {
                let properties = serde_json::from_str(&payload).map_err(|e| {
                    ServiceError::MalformedResponse(format!(
                        "invalid cached payload under '{key}': {e}"
                    ))
                })?;
                Ok(Some(properties))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, properties: &[Property], ttl_seconds: u64) -> Result<()> {
        let payload = serde_json::to_string(properties).map_err(|e| {
            ServiceError::MalformedResponse(format!("failed to encode payload for '{key}': {e}"))
        })?;

        let mut conn = self.pool.get().await?;
        let _: () = conn.set_ex(key, payload, ttl_seconds).await?;

        Ok(())
    }

    async fn info(&self) -> Result<CacheInfo> {
        let mut conn = self.pool.get().await?;
        let raw: String = redis::cmd("INFO")
            .arg("stats")
            .query_async(&mut conn)
            .await?;

        parse_info_stats(&raw)
    }
}

// == INFO Parsing ==
/// Extracts keyspace counters from a raw `INFO stats` block.
///
/// The block is line oriented, `name:value` pairs with `#` comment lines.
/// Absent counters default to zero; an unparseable counter is reported as a
/// malformed response rather than silently dropped.
fn parse_info_stats(raw: &str) -> Result<CacheInfo> {
    let mut info = CacheInfo::default();

    for line in raw.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("keyspace_hits:") {
            info.keyspace_hits = parse_counter("keyspace_hits", value)?;
        } else if let Some(value) = line.strip_prefix("keyspace_misses:") {
            info.keyspace_misses = parse_counter("keyspace_misses", value)?;
        }
    }

    Ok(info)
}

fn parse_counter(name: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        ServiceError::MalformedResponse(format!("unparseable {name} counter: '{}'", value.trim()))
    })
}
