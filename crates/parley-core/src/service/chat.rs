//! Chat service: title validation and chat lifecycle.
//!
//! Chats are created, read, and deleted; there is no update path.

use parley_types::chat::{Chat, MAX_TITLE_CHARS, NewChat};
use parley_types::error::{RepositoryError, ServiceError};
use tracing::debug;

use crate::repository::chat::ChatRepository;

/// Validate a raw chat title.
///
/// Surrounding whitespace is trimmed first. The trimmed title must contain
/// between 1 and [`MAX_TITLE_CHARS`] characters, none of them NUL (PostgreSQL
/// text cannot store it).
pub fn validate_title(raw: &str) -> Result<String, ServiceError> {
    let title = raw.trim();

    if title.is_empty() {
        return Err(ServiceError::InvalidInput(
            "chat title is required".to_string(),
        ));
    }

    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ServiceError::InvalidInput(
            "chat title is too long".to_string(),
        ));
    }

    if title.contains('\0') {
        return Err(ServiceError::InvalidInput(
            "chat title contains a NUL character".to_string(),
        ));
    }

    Ok(title.to_string())
}

/// Orchestrates chat persistence.
///
/// Generic over `ChatRepository` to maintain clean architecture
/// (parley-core never depends on parley-infra).
pub struct ChatService<R: ChatRepository> {
    repo: R,
}

impl<R: ChatRepository> ChatService<R> {
    /// Create a new chat service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a chat with an already validated title.
    pub async fn create_chat(&self, title: &str) -> Result<Chat, ServiceError> {
        let new_chat = NewChat {
            title: title.to_string(),
        };

        let chat = self
            .repo
            .create(&new_chat)
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        debug!(chat_id = chat.id, "Chat created");
        Ok(chat)
    }

    /// Get a chat by id.
    pub async fn get_chat(&self, id: i64) -> Result<Chat, ServiceError> {
        self.repo
            .get(id)
            .await
            .map_err(ServiceError::from_repository)?
            .ok_or(ServiceError::ChatNotFound)
    }

    /// Delete a chat by id. Its messages go with it (FK cascade).
    pub async fn delete_chat(&self, id: i64) -> Result<(), ServiceError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                debug!(chat_id = id, "Chat deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(ServiceError::ChatNotFound),
            Err(e) => Err(ServiceError::Persistence(e.to_string())),
        }
    }
}
