//! API Module
//!
//! HTTP handlers and routing for the property service REST API.
//!
//! # Endpoints
//! - `GET /properties` - List all properties (read-through cache)
//! - `POST /properties` - Create a property
//! - `GET /metrics/cache` - Cache hit/miss diagnostics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
