use thiserror::Error;

/// Errors from repository operations (used by trait definitions in parley-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors surfaced by the chat and message services.
///
/// The API layer maps these one-to-one onto HTTP status codes:
/// `InvalidInput` → 400, `ChatNotFound` → 404, `Persistence` → 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("chat not found")]
    ChatNotFound,

    #[error("storage error: {0}")]
    Persistence(String),
}

impl ServiceError {
    /// Wrap a storage failure, keeping `NotFound` as its own variant.
    pub fn from_repository(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::ChatNotFound,
            other => ServiceError::Persistence(other.to_string()),
        }
    }
}
