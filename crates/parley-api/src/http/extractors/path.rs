//! Chat id path extractor.

use std::str::FromStr;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::http::error::AppError;

/// The `{id}` segment of a chat route, parsed as `T`.
///
/// Any parse failure rejects with `400 {"error": "invalid chat_id"}`. Use
/// `ChatIdPath<NonZeroI64>` where an id of 0 must be refused too.
pub struct ChatIdPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ChatIdPath<T>
where
    T: FromStr,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_chat_id())?;

        raw.parse().map(ChatIdPath).map_err(|_| invalid_chat_id())
    }
}

fn invalid_chat_id() -> AppError {
    AppError::BadRequest("invalid chat_id".to_string())
}
