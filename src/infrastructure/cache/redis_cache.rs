//! Redis-backed cache repository.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::repositories::CacheRepository;
use crate::error::{RepositoryError, RepositoryResult};

/// Redis cache with one expiration applied to every write.
///
/// `ConnectionManager` is cheap to clone and reconnects on its own; each call
/// works on its own clone, so the repository can be shared freely. Errors are
/// returned to the caller, never swallowed.
pub struct RedisCacheRepository {
    client: ConnectionManager,
    ttl: Duration,
}

impl RedisCacheRepository {
    /// Wraps an existing connection manager.
    pub fn new(client: ConnectionManager, ttl: Duration) -> Self {
        Self { client, ttl }
    }

    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl` - Expiration applied to every [`CacheRepository::put`]
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Cache`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl: Duration) -> RepositoryResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis");

        Ok(Self::new(manager, ttl))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Expiration in milliseconds for `PSETEX`. Sub-millisecond remainders round
/// up, and zero becomes 1ms since Redis rejects a zero expiry.
fn ttl_millis(ttl: Duration) -> u64 {
    let millis = ttl.as_nanos().div_ceil(1_000_000).max(1);
    u64::try_from(millis).unwrap_or(u64::MAX)
}

#[async_trait]
impl CacheRepository for RedisCacheRepository {
    async fn put(&self, key: &str, payload: String) -> RepositoryResult<()> {
        let mut conn = self.client.clone();
        let millis = ttl_millis(self.ttl);

        conn.pset_ex::<_, _, ()>(key, payload, millis).await?;

        debug!("Cache SET: {} (TTL: {}ms)", key, millis);
        Ok(())
    }

    async fn get(&self, key: &str) -> RepositoryResult<Vec<u8>> {
        let mut conn = self.client.clone();

        match conn.get::<_, Option<Vec<u8>>>(key).await? {
            Some(bytes) => {
                debug!("Cache HIT: {}", key);
                Ok(bytes)
            }
            None => {
                debug!("Cache MISS: {}", key);
                Err(RepositoryError::NotFound)
            }
        }
    }
}
