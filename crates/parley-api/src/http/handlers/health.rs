//! Liveness probe and the JSON fallbacks for unmatched routes and methods.

use axum::Json;
use serde_json::{Value, json};

use crate::http::error::AppError;

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Any route that matched nothing.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// A known route called with a method it does not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
