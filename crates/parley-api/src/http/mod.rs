//! HTTP layer: axum router under `/api/{version}/` with JSON bodies,
//! `{"error": ...}` failures, CORS, and request tracing.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
