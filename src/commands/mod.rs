//! Backend API Wrappers
//!
//! Frontend bindings to the wedding API, organized by domain.

mod registry;
mod rsvp;

use crate::models::ApiResponse;

pub use registry::*;
pub use rsvp::*;

/// Shown when the request never reached the server
pub const CONNECTION_ERROR: &str = "Unable to connect to the server. Please try again later.";

/// API base URL, overridable at build time
pub fn api_base_url() -> &'static str {
    option_env!("WEDDING_API_URL").unwrap_or("http://localhost:8080")
}

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base_url().trim_end_matches('/'), path)
}

fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Outcome text shown after a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMessage {
    Success(String),
    Error(String),
}

impl SubmitMessage {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitMessage::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            SubmitMessage::Success(text) | SubmitMessage::Error(text) => text,
        }
    }

    /// Server `message` wins; otherwise the given fallback for the outcome
    pub fn from_result(
        result: Result<ApiResponse, String>,
        success_fallback: &str,
        error_fallback: &str,
    ) -> Self {
        match result {
            Ok(response) if response.success => {
                SubmitMessage::Success(response.message.unwrap_or_else(|| success_fallback.to_string()))
            }
            Ok(response) => {
                SubmitMessage::Error(response.message.unwrap_or_else(|| error_fallback.to_string()))
            }
            Err(_) => SubmitMessage::Error(CONNECTION_ERROR.to_string()),
        }
    }
}
