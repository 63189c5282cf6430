//! Error types and HTTP rendering for the `Climadex` service

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the `Climadex` service
///
/// Catalog failures never appear here: they are downgraded to an empty item
/// inside the orchestrator and the request still succeeds.
#[derive(Error, Debug)]
pub enum ClimadexError {
    /// Input validation errors (client's fault, no upstream call made)
    #[error("{message}")]
    Validation { message: String },

    /// Geocoding produced no match for the requested city
    #[error("{message}")]
    NotFound { message: String },

    /// Transport or parse failure talking to the geocoding or weather provider
    #[error("{message}: {details}")]
    Upstream { message: String, details: String },
}

impl ClimadexError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>, D: Into<String>>(message: S, details: D) -> Self {
        Self::Upstream {
            message: message.into(),
            details: details.into(),
        }
    }
}

impl From<reqwest::Error> for ClimadexError {
    fn from(err: reqwest::Error) -> Self {
        ClimadexError::upstream("Failed to reach upstream service", err.to_string())
    }
}

impl IntoResponse for ClimadexError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ClimadexError::Validation { message } => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            ClimadexError::NotFound { message } => {
                (StatusCode::NOT_FOUND, json!({ "error": message }))
            }
            ClimadexError::Upstream { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message, "details": details }),
            ),
        };
        tracing::error!("Request failed: {self}");
        (status, Json(body)).into_response()
    }
}
