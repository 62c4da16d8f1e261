//! Application error type mapping to HTTP status codes and `{"error": ...}`
//! bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, warn};

use parley_types::error::ServiceError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Errors surfaced by the chat and message services.
    Service(ServiceError),
    /// Malformed request: bad path id, bad JSON, bad query string.
    BadRequest(String),
    /// No route matched.
    NotFound,
    /// The route exists but not for this method.
    MethodNotAllowed,
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        AppError::Service(e)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Service(ServiceError::InvalidInput(_)) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Service(ServiceError::ChatNotFound) | AppError::NotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Service(ServiceError::Persistence(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Service(e) => e.to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::NotFound => "not found".to_string(),
            AppError::MethodNotAllowed => "method not allowed".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        // Storage details stay in the log.
        let public = if status.is_server_error() {
            "internal server error".to_string()
        } else {
            message
        };

        (status, Json(json!({ "error": public }))).into_response()
    }
}
