//! In-Memory Property Store
//!
//! Insertion-ordered store with monotonically increasing ids. Stands in for
//! the database, which is outside this service's responsibility.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{CreatePropertyRequest, Property};
use crate::store::PropertyStore;

// == Inner State ==
#[derive(Debug, Default)]
struct MemoryStoreInner {
    properties: Vec<Property>,
    next_id: u64,
}

// == Memory Store ==
/// Thread-safe in-process implementation of [`PropertyStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Property>> {
        let inner = self.inner.read().await;
        Ok(inner.properties.clone())
    }

    async fn insert(&self, request: CreatePropertyRequest) -> Result<Property> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;

        let property = Property {
            id: inner.next_id,
            title: request.title,
            description: request.description,
            price: request.price,
            location: request.location,
            created_at: Utc::now(),
        };

        inner.properties.push(property.clone());
        Ok(property)
    }
}
