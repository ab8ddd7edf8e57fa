//! Error taxonomy shared by the category and cache repositories.
//!
//! Driver errors are classified at the repository boundary: the few conditions
//! callers are expected to branch on get their own variant, everything else is
//! carried through untouched in one of the transport variants.

use thiserror::Error;

/// Errors returned by every repository operation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique constraint rejected the write (category slug already taken).
    #[error("category is duplicated")]
    DuplicateKey,

    /// A read matched no row, or the cache key is absent or expired.
    #[error("record not found")]
    NotFound,

    /// A write ran successfully but touched no row.
    #[error("no rows affected")]
    NoRowsAffected,

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RepositoryError {
    /// Returns `true` for backend failures that were passed through unclassified.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Cache(_) | Self::Serialization(_)
        )
    }
}

/// Normalizes the driver's "no rows" signal; unique violations are classified
/// by the write paths that can produce them.
impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::Database(other),
        }
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
