//! Property Record
//!
//! The domain record owned by the backing store. The cache holds copies of
//! these by value under a time-limited lease.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Property ==
/// A single real-estate style listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Store-assigned identifier
    pub id: u64,
    /// Listing title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Asking price; rendered as a string at the HTTP boundary
    pub price: f64,
    /// Human-readable location
    pub location: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
