//! Request and Response models for the property service API
//!
//! This module defines the domain record plus the DTOs (Data Transfer
//! Objects) used for serializing/deserializing HTTP request and response bodies.

pub mod property;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use property::Property;
pub use requests::CreatePropertyRequest;
pub use responses::{
    ErrorResponse, HealthResponse, PropertyData, PropertyListResponse,
};
