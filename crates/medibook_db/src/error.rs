//! Error types for the store client

use thiserror::Error;

/// Errors that can occur when working with the store client
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Store error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the store configuration
    #[error("Store configuration error: {0}")]
    ConfigError(String),

    /// Error with store URL parsing
    #[error("Store URL error: {0}")]
    UrlError(String),

    /// Error with pool creation
    #[error("Store pool error: {0}")]
    PoolError(String),

    /// Error with a query
    #[error("Store query error: {0}")]
    QueryError(String),

    /// A unique constraint rejected a write
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Other errors
    #[error("Other store error: {0}")]
    Other(String),
}

impl DbError {
    /// Maps a write error, surfacing unique-index rejections as their own
    /// variant so callers can distinguish them from plain query failures.
    pub fn from_write(err: sqlx::Error, context: &str) -> Self {
        match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                DbError::UniqueViolation(context.to_string())
            }
            other => DbError::QueryError(other.to_string()),
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DbError::UniqueViolation(_))
    }
}
