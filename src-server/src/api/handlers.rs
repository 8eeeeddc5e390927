//! HTTP handlers for the RSVP and registry endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use super::error::ApiError;
use super::{ApiResponse, AppState, HealthResponse, RegistryItemsResponse};
use crate::service::{GiftRequest, RsvpRequest};

pub const METHOD_OVERRIDE_HEADER: &str = "x-http-method-override";

/// The method a request asks for, honouring `X-HTTP-Method-Override`
fn effective_method(method: &Method, headers: &HeaderMap) -> Method {
    headers
        .get(METHOD_OVERRIDE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| Method::from_bytes(v.to_ascii_uppercase().as_bytes()).ok())
        .unwrap_or_else(|| method.clone())
}

fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "Rejected malformed JSON body");
        ApiError::InvalidJson
    })
}

/// `PATCH /v1/api/rsvp` (or `POST` with a `PATCH` override)
pub async fn submit_rsvp(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse>, ApiError> {
    let method = effective_method(&method, &headers);
    if method != Method::PATCH && method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let request: RsvpRequest = parse_json(&body)?;
    let message = state.rsvp.submit(request).await.inspect_err(|e| {
        warn!(error = %e, "RSVP not recorded");
    })?;
    Ok(Json(ApiResponse::success(message)))
}

/// `POST /v1/api/registry/gift`
pub async fn record_gift(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse>, ApiError> {
    let request: GiftRequest = parse_json(&body)?;
    let message = state.registry.record_gift(request).await.inspect_err(|e| {
        warn!(error = %e, "Gift not recorded");
    })?;
    Ok(Json(ApiResponse::success(message)))
}

/// `GET /v1/api/registry/items`
pub async fn list_registry_items(State(state): State<AppState>) -> impl IntoResponse {
    match state.registry.list_items().await {
        Ok(items) => (StatusCode::OK, Json(RegistryItemsResponse::items(items))),
        Err(e) => {
            error!(error = %e, "Failed to load registry items");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RegistryItemsResponse::error("Failed to load registry items")),
            )
        }
    }
}

/// Any method an endpoint does not serve
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
