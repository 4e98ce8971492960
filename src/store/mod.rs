//! Store Module
//!
//! The backing-store seam. The service only needs "fetch all records" (plus
//! inserts to have something to list); a SQL store would slot behind the same
//! trait.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CreatePropertyRequest, Property};

// == Property Store Trait ==
/// Source of truth for property records.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Returns every record, in stable store order.
    async fn fetch_all(&self) -> Result<Vec<Property>>;

    /// Inserts a new record, assigning its id and creation timestamp.
    async fn insert(&self, request: CreatePropertyRequest) -> Result<Property>;
}
