//! Response DTOs for the property service API
//!
//! Defines the structure of outgoing HTTP response bodies. The wire shape of
//! a listing carries the price as a string with two decimals and the creation
//! timestamp as ISO 8601.

use serde::Serialize;

use crate::models::Property;

/// Wire representation of a single listing
#[derive(Debug, Clone, Serialize)]
pub struct PropertyData {
    /// Store-assigned identifier
    pub id: u64,
    /// Listing title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Asking price, two decimals
    pub price: String,
    /// Human-readable location
    pub location: String,
    /// Creation timestamp, ISO 8601
    pub created_at: String,
}

impl From<&Property> for PropertyData {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id,
            title: property.title.clone(),
            description: property.description.clone(),
            price: format!("{:.2}", property.price),
            location: property.location.clone(),
            created_at: property.created_at.to_rfc3339(),
        }
    }
}

/// Response body for the listing endpoint (GET /properties)
#[derive(Debug, Clone, Serialize)]
pub struct PropertyListResponse {
    /// All listings, store order
    pub properties: Vec<PropertyData>,
}

impl PropertyListResponse {
    /// Creates a new PropertyListResponse from domain records
    pub fn new(properties: &[Property]) -> Self {
        Self {
            properties: properties.iter().map(PropertyData::from).collect(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> Property {
        Property {
            id: 7,
            title: "Courtyard house".to_string(),
            description: "Shaded patio".to_string(),
            price: 945000.5,
            location: "Marrakesh".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    #[test]
    fn test_property_data_price_is_string() {
        let data = PropertyData::from(&sample());
        assert_eq!(data.price, "945000.50");
    }

    #[test]
    fn test_property_data_created_at_iso8601() {
        let data = PropertyData::from(&sample());
        assert_eq!(data.created_at, "2024-03-14T09:26:53+00:00");
    }

    #[test]
    fn test_list_response_serialize() {
        let resp = PropertyListResponse::new(&[sample()]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"properties\""));
        assert!(json.contains("Courtyard house"));
    }

    #[test]
    fn test_list_response_empty() {
        let resp = PropertyListResponse::new(&[]);
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"properties":[]}"#);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
