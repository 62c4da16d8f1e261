//! Message repository trait definition.
//!
//! Messages are only created and listed; there is no update or delete.
//! The infrastructure layer (parley-infra) implements this trait with
//! PostgreSQL persistence.

use parley_types::error::RepositoryError;
use parley_types::message::{Message, NewMessage};

/// Repository trait for message persistence.
pub trait MessageRepository: Send + Sync {
    /// Insert a message. Returns `NotFound` if `message.chat_id` references
    /// no chat; the check and the insert happen in one statement.
    fn create(
        &self,
        message: &NewMessage,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// Get up to `limit` messages of a chat, newest first.
    fn list_by_chat(
        &self,
        chat_id: i64,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;
}
