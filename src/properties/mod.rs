//! Properties Module
//!
//! The service layer: the cache-aside reader over the backing store and the
//! cache metrics reporter.

mod service;

pub use service::PropertyService;
