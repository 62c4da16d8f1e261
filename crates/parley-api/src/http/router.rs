//! Axum router configuration with middleware.
//!
//! Chat routes live under `/api/{version}/`; `/health` sits at the root.
//! Unmatched paths and methods get JSON errors like every other failure.
//! Middleware: permissive CORS and request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use parley_core::repository::chat::ChatRepository;
use parley_core::repository::message::MessageRepository;
use parley_types::config::ApiConfig;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router<C, M>(state: AppState<C, M>, api: &ApiConfig) -> Router
where
    C: ChatRepository + 'static,
    M: MessageRepository + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chats", post(handlers::chat::create_chat::<C, M>))
        .route(
            "/chats/{id}",
            get(handlers::chat::get_chat::<C, M>).delete(handlers::chat::delete_chat::<C, M>),
        )
        .route(
            "/chats/{id}/messages",
            post(handlers::message::create_message::<C, M>),
        )
        .method_not_allowed_fallback(handlers::health::method_not_allowed);

    Router::new()
        .nest(&api.prefix(), api_routes)
        .route("/health", get(handlers::health::health))
        .method_not_allowed_fallback(handlers::health::method_not_allowed)
        .fallback(handlers::health::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
