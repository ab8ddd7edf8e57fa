//! PostgreSQL repository implementations.
//!
//! Queries are built at runtime with SQLx bind parameters, so the crate builds
//! without a live database.
//!
//! - [`PgCategoryRepository`] - Category storage and cursor pagination
//! - [`connect_pool`] - Pool construction from [`crate::config::Config`]

pub mod pg_category_repository;
pub mod pool;

pub use pg_category_repository::PgCategoryRepository;
pub use pool::connect_pool;
