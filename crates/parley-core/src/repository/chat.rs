//! Chat repository trait definition.

use parley_types::chat::{Chat, NewChat};
use parley_types::error::RepositoryError;

/// Repository trait for chat persistence.
///
/// Implementations live in parley-infra (e.g., `PgChatRepository`).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait ChatRepository: Send + Sync {
    /// Insert a chat. Returns the stored row with its generated id and timestamp.
    fn create(
        &self,
        chat: &NewChat,
    ) -> impl std::future::Future<Output = Result<Chat, RepositoryError>> + Send;

    /// Get a chat by its id.
    fn get(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Chat>, RepositoryError>> + Send;

    /// Delete a chat by its id. Returns `NotFound` if no row was removed.
    fn delete(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
