//! Cache Module
//!
//! The cache-service seam: a trait for get/set/info, hit/miss metric math,
//! a Redis-backed implementation and an in-process one for tests and embedding.

mod backend;
mod memory;
mod metrics;
mod redis;


// Re-export public types
pub use backend::{CacheInfo, PropertyCache};
pub use memory::MemoryCache;
pub use metrics::CacheMetrics;
pub use redis::RedisCache;

// == Public Constants ==
/// Fixed key under which the complete property list is cached
pub const ALL_PROPERTIES_KEY: &str = "all_properties";
