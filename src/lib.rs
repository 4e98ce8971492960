//! Property Cache - A property listing service with a Redis read-through cache
//!
//! Serves real-estate style listings from a backing store, caching the full
//! list under a fixed key, and reports the cache server's hit/miss ratios.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod properties;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use properties::PropertyService;
