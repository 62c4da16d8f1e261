//! PostgreSQL message repository implementation.

use parley_core::repository::message::MessageRepository;
use parley_types::error::RepositoryError;
use parley_types::message::{Message, NewMessage};
use sqlx::Row;
use sqlx::postgres::PgRow;

use super::map_sqlx_error;
use super::pool::DatabasePool;

/// PostgreSQL-backed implementation of `MessageRepository`.
pub struct PgMessageRepository {
    pool: DatabasePool,
}

impl PgMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn message_from_row(row: &PgRow) -> Result<Message, sqlx::Error> {
    Ok(Message {
        id: row.try_get("id")?,
        chat_id: row.try_get("chat_id")?,
        text: row.try_get("text")?,
        created_at: row.try_get("created_at")?,
    })
}

impl MessageRepository for PgMessageRepository {
    async fn create(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        // The existence check and the insert are one statement. The foreign
        // key still catches a chat deleted between the two.
        let row = sqlx::query(
            r#"INSERT INTO messages (chat_id, text)
               SELECT $1::BIGINT, $2::TEXT
               WHERE EXISTS (SELECT 1 FROM chats WHERE id = $1::BIGINT)
               RETURNING id, chat_id, text, created_at"#,
        )
        .bind(message.chat_id)
        .bind(&message.text)
        .fetch_optional(&self.pool.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        message_from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))
    }

    async fn list_by_chat(
        &self,
        chat_id: i64,
        limit: u32,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, chat_id, text, created_at
               FROM messages
               WHERE chat_id = $1
               ORDER BY created_at DESC, id DESC
               LIMIT $2"#,
        )
        .bind(chat_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            messages.push(
                message_from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?,
            );
        }

        Ok(messages)
    }
}
