//! Cache Metrics Snapshot
//!
//! Value object reporting cumulative hit/miss counters and derived ratios.
//! Computed fresh on each call, never persisted.

use serde::Serialize;

// == Cache Metrics ==
/// A point-in-time report of the cache server's keyspace statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheMetrics {
    /// Lookups satisfied from cache
    pub keyspace_hits: u64,
    /// Lookups that fell through
    pub keyspace_misses: u64,
    /// hits + misses
    pub total_requests: u64,
    /// hits / total, rounded to 4 decimal places; 0 when total is 0
    pub hit_ratio: f64,
    /// 1 - hit_ratio, rounded to 4 decimal places; 0 when total is 0
    pub miss_ratio: f64,
    /// Set when the counters could not be collected; all numeric fields are
    /// zero in that case
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CacheMetrics {
    // == From Counters ==
    /// Computes a snapshot from raw keyspace counters.
    pub fn from_counters(keyspace_hits: u64, keyspace_misses: u64) -> Self {
        let total_requests = keyspace_hits + keyspace_misses;
        let hit_ratio = if total_requests > 0 {
            keyspace_hits as f64 / total_requests as f64
        } else {
            0.0
        };

        Self {
            keyspace_hits,
            keyspace_misses,
            total_requests,
            hit_ratio: round4(hit_ratio),
            miss_ratio: if total_requests > 0 {
                round4(1.0 - hit_ratio)
            } else {
                0.0
            },
            error: None,
        }
    }

    // == Unavailable ==
    /// The fallback shape returned when the counters cannot be collected:
    /// every numeric field zeroed, the failure carried in `error`.
    pub fn unavailable(error: impl Into<String>) -> Self {
        Self {
            keyspace_hits: 0,
            keyspace_misses: 0,
            total_requests: 0,
            hit_ratio: 0.0,
            miss_ratio: 0.0,
            error: Some(error.into()),
        }
    }
}

// == Rounding ==
/// Rounds to 4 decimal places, half away from zero.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_mixed_counters() {
        let metrics = CacheMetrics::from_counters(80, 20);
        assert_eq!(metrics.total_requests, 100);
        assert_eq!(metrics.hit_ratio, 0.8);
        assert_eq!(metrics.miss_ratio, 0.2);
        assert!(metrics.error.is_none());
    }

    #[test]
    fn test_metrics_zero_counters_no_division_error() {
        let metrics = CacheMetrics::from_counters(0, 0);
        assert_eq!(metrics.total_requests, 0);
        assert_eq!(metrics.hit_ratio, 0.0);
        assert_eq!(metrics.miss_ratio, 0.0);
    }

    #[test]
    fn test_metrics_rounded_to_four_places() {
        // 1/3 and 2/3 land on repeating decimals
        let metrics = CacheMetrics::from_counters(1, 2);
        assert_eq!(metrics.hit_ratio, 0.3333);
        assert_eq!(metrics.miss_ratio, 0.6667);
    }

    #[test]
    fn test_metrics_all_hits() {
        let metrics = CacheMetrics::from_counters(5, 0);
        assert_eq!(metrics.hit_ratio, 1.0);
        assert_eq!(metrics.miss_ratio, 0.0);
    }

    #[test]
    fn test_unavailable_shape() {
        let metrics = CacheMetrics::unavailable("connection refused");
        assert_eq!(metrics.keyspace_hits, 0);
        assert_eq!(metrics.keyspace_misses, 0);
        assert_eq!(metrics.total_requests, 0);
        assert_eq!(metrics.hit_ratio, 0.0);
        assert_eq!(metrics.miss_ratio, 0.0);
        assert_eq!(metrics.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_serialize_omits_error_when_absent() {
        let json = serde_json::to_string(&CacheMetrics::from_counters(80, 20)).unwrap();
        assert!(!json.contains("error"));
        assert!(json.contains("\"hit_ratio\":0.8"));
    }

    #[test]
    fn test_serialize_includes_error_when_present() {
        let json = serde_json::to_string(&CacheMetrics::unavailable("boom")).unwrap();
        assert!(json.contains("\"error\":\"boom\""));
        assert!(json.contains("\"total_requests\":0"));
    }
}
