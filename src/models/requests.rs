//! Request DTOs for the property service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Maximum allowed title length in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Request body for creating a listing (POST /properties)
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePropertyRequest {
    /// Listing title
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Asking price
    pub price: f64,
    /// Human-readable location
    pub location: String,
}

impl CreatePropertyRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        if self.title.len() > MAX_TITLE_LENGTH {
            return Some(format!(
                "Title exceeds maximum length of {} characters",
                MAX_TITLE_LENGTH
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Price must be a non-negative number".to_string());
        }
        if self.location.is_empty() {
            return Some("Location cannot be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"title": "Cottage", "price": 120000.0, "location": "Accra"}"#;
        let req: CreatePropertyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Cottage");
        assert_eq!(req.location, "Accra");
        assert!(req.description.is_empty());
    }

    #[test]
    fn test_validate_empty_title() {
        let req = CreatePropertyRequest {
            title: "".to_string(),
            description: "desc".to_string(),
            price: 100.0,
            location: "Kigali".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_negative_price() {
        let req = CreatePropertyRequest {
            title: "Bungalow".to_string(),
            description: String::new(),
            price: -1.0,
            location: "Kigali".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_title_too_long() {
        let req = CreatePropertyRequest {
            title: "x".repeat(MAX_TITLE_LENGTH + 1),
            description: String::new(),
            price: 100.0,
            location: "Kigali".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = CreatePropertyRequest {
            title: "Bungalow".to_string(),
            description: "Garden included".to_string(),
            price: 100.0,
            location: "Kigali".to_string(),
        };
        assert!(req.validate().is_none());
    }
}
