//! Maps service errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::ApiResponse;
use crate::domain::{DomainError, GiftValidationError};
use crate::service::ServiceError;

pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

/// Error half of every JSON handler
#[derive(Debug)]
pub enum ApiError {
    MethodNotAllowed,
    InvalidJson,
    Service(ServiceError),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        ApiError::Service(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::Service(e) => match e {
                ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                ServiceError::GuestNotFound { .. } => StatusCode::NOT_FOUND,
                ServiceError::Gift(GiftValidationError::NotFound { .. }) => StatusCode::NOT_FOUND,
                ServiceError::Gift(_) => StatusCode::BAD_REQUEST,
                ServiceError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
                ServiceError::Domain(DomainError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
                ServiceError::Domain(DomainError::Conflict(_)) => StatusCode::CONFLICT,
                ServiceError::Domain(DomainError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Text shown to the guest; storage details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            ApiError::MethodNotAllowed => "Method not allowed".to_string(),
            ApiError::InvalidJson => "Invalid JSON syntax".to_string(),
            ApiError::Service(ServiceError::Domain(_)) => INTERNAL_ERROR_MESSAGE.to_string(),
            ApiError::Service(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        }
        (status, Json(ApiResponse::failure(self.message()))).into_response()
    }
}
