//! Chat handlers: create, fetch with recent messages, delete.

use std::time::Instant;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;

use parley_core::repository::chat::ChatRepository;
use parley_core::repository::message::MessageRepository;
use parley_core::service::chat::validate_title;
use parley_core::service::message::resolve_limit;
use parley_types::chat::Chat;
use parley_types::message::Message;

use crate::http::error::AppError;
use crate::http::extractors::json::JsonBody;
use crate::http::extractors::path::ChatIdPath;
use crate::state::AppState;

/// Request body for `POST /chats`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateChatRequest {
    #[serde(default)]
    pub title: String,
}

/// Query string of `GET /chats/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatQuery {
    pub limit: Option<String>,
}

/// A chat together with its newest messages.
#[derive(Debug, Serialize)]
pub struct ChatWithMessages {
    pub chat: Chat,
    pub messages: Vec<Message>,
}

/// POST /api/{version}/chats - Create a chat.
pub async fn create_chat<C, M>(
    State(state): State<AppState<C, M>>,
    JsonBody(body): JsonBody<CreateChatRequest>,
) -> Result<(StatusCode, Json<Chat>), AppError>
where
    C: ChatRepository + 'static,
    M: MessageRepository + 'static,
{
    let start = Instant::now();

    let title = validate_title(&body.title)?;
    let chat = state.chat_service.create_chat(&title).await?;

    info!(
        chat_id = chat.id,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Chat created"
    );
    Ok((StatusCode::CREATED, Json(chat)))
}

/// GET /api/{version}/chats/{id}?limit=N - Fetch a chat and its newest
/// messages, newest first.
pub async fn get_chat<C, M>(
    State(state): State<AppState<C, M>>,
    ChatIdPath(chat_id): ChatIdPath<i64>,
    query: Result<Query<ChatQuery>, QueryRejection>,
) -> Result<Json<ChatWithMessages>, AppError>
where
    C: ChatRepository + 'static,
    M: MessageRepository + 'static,
{
    let start = Instant::now();

    let Query(query) = query.map_err(|_| AppError::BadRequest("invalid limit".to_string()))?;
    let limit = resolve_limit(query.limit.as_deref())?;

    let chat = state.chat_service.get_chat(chat_id).await?;
    let messages = state.message_service.list_messages(chat_id, limit).await?;

    info!(
        chat_id,
        limit,
        messages = messages.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Chat fetched"
    );
    Ok(Json(ChatWithMessages { chat, messages }))
}

/// DELETE /api/{version}/chats/{id} - Delete a chat and all its messages.
pub async fn delete_chat<C, M>(
    State(state): State<AppState<C, M>>,
    ChatIdPath(chat_id): ChatIdPath<i64>,
) -> Result<StatusCode, AppError>
where
    C: ChatRepository + 'static,
    M: MessageRepository + 'static,
{
    let start = Instant::now();

    state.chat_service.delete_chat(chat_id).await?;

    info!(
        chat_id,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Chat deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
