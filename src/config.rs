//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL
    pub redis_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for the cached property list
    pub cache_ttl: u64,
    /// max-age in seconds advertised to HTTP caches on the listing endpoint
    pub http_cache_ttl: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Redis connection URL (default: redis://127.0.0.1:6379)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `CACHE_TTL` - Property list TTL in seconds (default: 3600)
    /// - `HTTP_CACHE_TTL` - Listing endpoint max-age in seconds (default: 900)
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            http_cache_ttl: env::var("HTTP_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(900),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379".to_string(),
            server_port: 8000,
            cache_ttl: 3600,
            http_cache_ttl: 900,
        }
    }
}
