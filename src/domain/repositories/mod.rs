//! Repository trait definitions.
//!
//! Traits here define the contracts; concrete implementations live in
//! `crate::infrastructure`.
//!
//! - [`CategoryRepository`] - Category CRUD and cursor pagination
//! - [`CacheRepository`] - Key-value cache with fixed TTL

pub mod cache_repository;
pub mod category_repository;

pub use cache_repository::{CacheRepository, CacheRepositoryExt};
pub use category_repository::CategoryRepository;

#[cfg(test)]
pub use cache_repository::MockCacheRepository;
