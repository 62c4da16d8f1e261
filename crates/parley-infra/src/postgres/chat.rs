//! PostgreSQL chat repository implementation.
//!
//! Implements `ChatRepository` from `parley-core` using sqlx: raw queries,
//! a private row mapper, and store-generated ids and timestamps via
//! `RETURNING`.

use parley_core::repository::chat::ChatRepository;
use parley_types::chat::{Chat, NewChat};
use parley_types::error::RepositoryError;
use sqlx::Row;
use sqlx::postgres::PgRow;

use super::map_sqlx_error;
use super::pool::DatabasePool;

/// PostgreSQL-backed implementation of `ChatRepository`.
pub struct PgChatRepository {
    pool: DatabasePool,
}

impl PgChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn chat_from_row(row: &PgRow) -> Result<Chat, sqlx::Error> {
    Ok(Chat {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        created_at: row.try_get("created_at")?,
    })
}

impl ChatRepository for PgChatRepository {
    async fn create(&self, chat: &NewChat) -> Result<Chat, RepositoryError> {
        let row = sqlx::query(
            r#"INSERT INTO chats (title)
               VALUES ($1)
               RETURNING id, title, created_at"#,
        )
        .bind(&chat.title)
        .fetch_one(&self.pool.pool)
        .await
        .map_err(map_sqlx_error)?;

        chat_from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))
    }

    async fn get(&self, id: i64) -> Result<Option<Chat>, RepositoryError> {
        let row = sqlx::query("SELECT id, title, created_at FROM chats WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref()
            .map(chat_from_row)
            .transpose()
            .map_err(|e| RepositoryError::Query(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM chats WHERE id = $1")
            .bind(id)
            .execute(&self.pool.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
