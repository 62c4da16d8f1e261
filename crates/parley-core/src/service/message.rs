//! Message service: text validation, creation, and chat-scoped listing.

use parley_types::error::{RepositoryError, ServiceError};
use parley_types::message::{MAX_TEXT_CHARS, Message, NewMessage};
use tracing::{debug, warn};

use crate::repository::message::MessageRepository;

/// Number of messages returned when the caller does not ask for a limit.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

/// Upper bound on messages per listing. Larger requests are clamped.
pub const MAX_LIST_LIMIT: u32 = 100;

/// Validate message text. Text is not trimmed and must not contain NUL.
pub fn validate_text(raw: &str) -> Result<(), ServiceError> {
    if raw.is_empty() {
        return Err(ServiceError::InvalidInput(
            "message text is required".to_string(),
        ));
    }

    if raw.chars().count() > MAX_TEXT_CHARS {
        return Err(ServiceError::InvalidInput(
            "message text is too long".to_string(),
        ));
    }

    if raw.contains('\0') {
        return Err(ServiceError::InvalidInput(
            "message text contains a NUL character".to_string(),
        ));
    }

    Ok(())
}

/// Resolve the `limit` query parameter of a chat listing.
///
/// - absent or empty: [`DEFAULT_LIST_LIMIT`]
/// - not an integer, or below 1: `InvalidInput("invalid limit")`
/// - above [`MAX_LIST_LIMIT`]: clamped without error
pub fn resolve_limit(raw: Option<&str>) -> Result<u32, ServiceError> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_LIST_LIMIT);
    };

    let requested: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ServiceError::InvalidInput("invalid limit".to_string()))?;

    if requested < 1 {
        return Err(ServiceError::InvalidInput("invalid limit".to_string()));
    }

    if requested > i64::from(MAX_LIST_LIMIT) {
        warn!(requested, max = MAX_LIST_LIMIT, "Limit too large, clamping");
        return Ok(MAX_LIST_LIMIT);
    }

    Ok(requested as u32)
}

/// Orchestrates message persistence.
pub struct MessageService<R: MessageRepository> {
    repo: R,
}

impl<R: MessageRepository> MessageService<R> {
    /// Create a new message service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a message with already validated text.
    ///
    /// Fails with `ChatNotFound` when `chat_id` references no chat.
    pub async fn create_message(&self, text: &str, chat_id: i64) -> Result<Message, ServiceError> {
        let new_message = NewMessage {
            chat_id,
            text: text.to_string(),
        };

        let message = self.repo.create(&new_message).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::ChatNotFound,
            other => ServiceError::Persistence(other.to_string()),
        })?;

        debug!(chat_id, message_id = message.id, "Message created");
        Ok(message)
    }

    /// List the newest messages of a chat, at most `limit` of them.
    ///
    /// The chat's existence is not checked: an unknown chat yields an empty
    /// list.
    pub async fn list_messages(
        &self,
        chat_id: i64,
        limit: u32,
    ) -> Result<Vec<Message>, ServiceError> {
        let limit = limit.min(MAX_LIST_LIMIT);

        self.repo
            .list_by_chat(chat_id, limit)
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))
    }
}
