//! Message creation handler.

use std::num::NonZeroI64;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::info;

use parley_core::repository::chat::ChatRepository;
use parley_core::repository::message::MessageRepository;
use parley_core::service::message::validate_text;
use parley_types::message::Message;

use crate::http::error::AppError;
use crate::http::extractors::json::JsonBody;
use crate::http::extractors::path::ChatIdPath;
use crate::state::AppState;

/// Request body for `POST /chats/{id}/messages`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub text: String,
}

/// POST /api/{version}/chats/{id}/messages - Post a message to a chat.
///
/// The path id is checked before the body is read, so a bad id wins over a
/// bad body.
pub async fn create_message<C, M>(
    State(state): State<AppState<C, M>>,
    ChatIdPath(chat_id): ChatIdPath<NonZeroI64>,
    JsonBody(body): JsonBody<CreateMessageRequest>,
) -> Result<(StatusCode, Json<Message>), AppError>
where
    C: ChatRepository + 'static,
    M: MessageRepository + 'static,
{
    let start = Instant::now();
    let chat_id = chat_id.get();

    validate_text(&body.text)?;
    let message = state
        .message_service
        .create_message(&body.text, chat_id)
        .await?;

    info!(
        chat_id,
        message_id = message.id,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Message created"
    );
    Ok((StatusCode::CREATED, Json(message)))
}
