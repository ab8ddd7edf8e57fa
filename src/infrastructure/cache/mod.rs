//! Redis implementation of [`crate::domain::repositories::CacheRepository`].

mod redis_cache;

pub use redis_cache::RedisCacheRepository;
