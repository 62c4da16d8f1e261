//! Application state wiring services to repositories.
//!
//! Services are generic over the repository traits. `AppState` carries those
//! generics so the router can run against PostgreSQL in production and
//! against in-memory repositories in tests.

use std::sync::Arc;

use parley_core::repository::chat::ChatRepository;
use parley_core::repository::message::MessageRepository;
use parley_core::service::chat::ChatService;
use parley_core::service::message::MessageService;
use parley_infra::postgres::chat::PgChatRepository;
use parley_infra::postgres::message::PgMessageRepository;
use parley_infra::postgres::pool::DatabasePool;

/// State pinned to the PostgreSQL repositories.
pub type PgAppState = AppState<PgChatRepository, PgMessageRepository>;

/// Shared state handed to every handler.
pub struct AppState<C: ChatRepository, M: MessageRepository> {
    pub chat_service: Arc<ChatService<C>>,
    pub message_service: Arc<MessageService<M>>,
}

// Manual impl: derive would require `C: Clone` and `M: Clone`.
impl<C: ChatRepository, M: MessageRepository> Clone for AppState<C, M> {
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            message_service: Arc::clone(&self.message_service),
        }
    }
}

impl<C: ChatRepository, M: MessageRepository> AppState<C, M> {
    pub fn new(chat_repo: C, message_repo: M) -> Self {
        Self {
            chat_service: Arc::new(ChatService::new(chat_repo)),
            message_service: Arc::new(MessageService::new(message_repo)),
        }
    }
}

impl PgAppState {
    /// Wire both services to one shared connection pool.
    pub fn from_pool(pool: DatabasePool) -> Self {
        Self::new(
            PgChatRepository::new(pool.clone()),
            PgMessageRepository::new(pool),
        )
    }
}
