//! API Handlers
//!
//! HTTP request handlers for each property service endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::cache::{CacheMetrics, PropertyCache};
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::models::{CreatePropertyRequest, HealthResponse, PropertyData, PropertyListResponse};
use crate::properties::PropertyService;
use crate::store::PropertyStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service over the injected store and cache
    pub service: PropertyService,
    /// max-age advertised to HTTP caches on the listing endpoint
    pub http_cache_ttl: u64,
}

impl AppState {
    /// Creates a new AppState with the given service.
    pub fn new(service: PropertyService, http_cache_ttl: u64) -> Self {
        Self {
            service,
            http_cache_ttl,
        }
    }

    /// Creates a new AppState from configuration and collaborators.
    pub fn from_config(
        config: &Config,
        store: Arc<dyn PropertyStore>,
        cache: Arc<dyn PropertyCache>,
    ) -> Self {
        let service = PropertyService::new(store, cache, config.cache_ttl);
        Self::new(service, config.http_cache_ttl)
    }
}

/// Handler for GET /properties
///
/// Returns the full listing through the cache-aside reader. The response
/// carries a `Cache-Control: public, max-age=N` header so the transport layer
/// can cache the rendered payload as well.
pub async fn list_properties_handler(State(state): State<AppState>) -> Result<Response> {
    let properties = state.service.get_all_properties().await?;

    let mut response = Json(PropertyListResponse::new(&properties)).into_response();
    if let Ok(value) = HeaderValue::try_from(format!("public, max-age={}", state.http_cache_ttl)) {
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }

    Ok(response)
}

/// Handler for POST /properties
///
/// Creates a listing in the backing store. The cached listing is not
/// invalidated; it stays stale until its lease expires.
pub async fn create_property_handler(
    State(state): State<AppState>,
    Json(req): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<PropertyData>)> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let property = state.service.create_property(req).await?;
    Ok((StatusCode::CREATED, Json(PropertyData::from(&property))))
}

/// Handler for GET /metrics/cache
///
/// Returns the cache hit/miss snapshot. Always 200: collection failures are
/// folded into the snapshot's `error` field by the service.
pub async fn cache_metrics_handler(State(state): State<AppState>) -> Json<CacheMetrics> {
    Json(state.service.cache_metrics().await)
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::store::MemoryStore;

    fn create_test_state() -> AppState {
        let service = PropertyService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryCache::new()),
            3600,
        );
        AppState::new(service, 900)
    }

    fn create_request() -> CreatePropertyRequest {
        CreatePropertyRequest {
            title: "Townhouse".to_string(),
            description: "Corner lot".to_string(),
            price: 320_000.0,
            location: "Abuja".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let state = create_test_state();

        let (status, Json(created)) =
            create_property_handler(State(state.clone()), Json(create_request()))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.title, "Townhouse");
        assert_eq!(created.price, "320000.00");

        let response = list_properties_handler(State(state)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=900"
        );
    }

    #[tokio::test]
    async fn test_create_invalid_request() {
        let state = create_test_state();

        let mut req = create_request();
        req.title.clear();

        let result = create_property_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(ServiceError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_metrics_handler_zeroed_without_traffic() {
        let state = create_test_state();

        let Json(metrics) = cache_metrics_handler(State(state)).await;
        assert_eq!(metrics.total_requests, 0);
        assert_eq!(metrics.hit_ratio, 0.0);
        assert!(metrics.error.is_none());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
