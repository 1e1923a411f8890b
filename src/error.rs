//! Service error taxonomy and its HTTP mapping.

use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors surfaced to API clients.
///
/// The status mapping is part of the legacy wire contract: unresolved
/// identifiers return 400 (not 404), and authorization failures return
/// 403 (not 401).
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Client-supplied data failed a field rule.
    Validation(String),
    /// An identifier did not resolve to a record. Carries the id as
    /// received, for the message.
    NotFound(String),
    /// Missing, malformed, or expired bearer token.
    Unauthorized,
    /// A store or signing primitive faulted unexpectedly. Carries the
    /// generic per-operation message; internal detail is logged, never
    /// sent to the client.
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::NotFound(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Internal(msg) => msg.clone(),
            Self::NotFound(id) => format!("Recipe with id {} does not exist", id),
            Self::Unauthorized => "Unauthorized".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.client_message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "message": self.client_message(),
        });
        (self.status(), Json(body)).into_response()
    }
}
