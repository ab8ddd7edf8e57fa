//! Cache repository trait.

use crate::error::RepositoryResult;
use async_trait::async_trait;
use serde::Serialize;

/// Key-value cache with a fixed, per-instance expiration.
///
/// Values are stored as JSON text. Reads hand back the raw bytes; decoding them
/// is up to the caller (`serde_json::from_slice`).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCacheRepository`] - Redis-backed cache
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheRepository: Send + Sync {
    /// Writes an already-encoded payload under `key` with the configured TTL.
    async fn put(&self, key: &str, payload: String) -> RepositoryResult<()>;

    /// Reads the raw payload stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`](crate::error::RepositoryError::NotFound)
    /// if the key is absent or expired.
    async fn get(&self, key: &str) -> RepositoryResult<Vec<u8>>;
}

/// Typed writes on top of [`CacheRepository`].
#[async_trait]
pub trait CacheRepositoryExt: CacheRepository {
    /// Serializes `value` to JSON and stores it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Serialization`](crate::error::RepositoryError::Serialization)
    /// if `value` cannot be encoded, or the backend error if the write fails.
    async fn set<T>(&self, key: &str, value: &T) -> RepositoryResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let payload = serde_json::to_string(value)?;
        self.put(key, payload).await
    }
}

impl<C: CacheRepository + ?Sized> CacheRepositoryExt for C {}
