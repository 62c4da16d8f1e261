//! PostgreSQL storage layer.
//!
//! Repository implementations backed by a shared sqlx `PgPool`. Every
//! repository operation is a single SQL statement.

pub mod chat;
pub mod message;
pub mod migrate;
pub mod pool;

use parley_types::error::RepositoryError;
use tracing::warn;

/// Map a sqlx error onto the repository error taxonomy.
///
/// A foreign-key violation can only come from a message referencing a
/// missing chat, so it maps to `NotFound`.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            warn!(error = %err, "Database connection failure");
            RepositoryError::Connection
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepositoryError::NotFound,
        _ => RepositoryError::Query(err.to_string()),
    }
}
