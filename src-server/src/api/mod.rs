//! API Layer
//!
//! axum router, JSON bodies and the shared handler state.

mod error;
mod handlers;


pub use error::{ApiError, INTERNAL_ERROR_MESSAGE};

use axum::http::{header, HeaderName, Method};
use axum::routing::{get, patch, post};
use axum::Router;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::RegistryItem;
use crate::middleware::{RateLimitLayer, RateLimiter};
use crate::service::{RegistryService, RsvpService};

/// `{success, message?, error?}` body of the write endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            error: None,
        }
    }
}

/// `{success, items?, error?}` body of the registry list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryItemsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RegistryItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RegistryItemsResponse {
    pub fn items(items: Vec<RegistryItem>) -> Self {
        Self {
            success: true,
            items: Some(items),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            items: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Services shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub rsvp: Arc<RsvpService>,
    pub registry: Arc<RegistryService>,
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(handlers::METHOD_OVERRIDE_HEADER),
        ])
}

/// Build the full application router.
///
/// The `/v1/api` routes are rate limited; `/health` is not. Every response
/// carries the CORS headers.
pub fn router(state: AppState, limiter: Arc<RateLimiter>) -> Router {
    let api = Router::new()
        .route(
            "/v1/api/rsvp",
            patch(handlers::submit_rsvp)
                .post(handlers::submit_rsvp)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/v1/api/registry/items",
            get(handlers::list_registry_items).fallback(handlers::method_not_allowed),
        )
        .route(
            "/v1/api/registry/gift",
            post(handlers::record_gift).fallback(handlers::method_not_allowed),
        )
        .layer(RateLimitLayer::new(limiter))
        .with_state(state);

    Router::new()
        .route("/health", get(handlers::health))
        .merge(api)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
