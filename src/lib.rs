//! # Category Store
//!
//! Persistence adapters for blog categories: a PostgreSQL repository and a
//! Redis cache repository.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`Category`] model and repository traits
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and Redis implementations
//!
//! Both repositories are stateless wrappers around a handle the caller passes in
//! (`Arc<PgPool>`, `ConnectionManager`). Every operation is one round trip; drop
//! the future to cancel it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use category_store::prelude::*;
//!
//! let repo = PgCategoryRepository::new(Arc::new(pool));
//! let mut news = Category::new("News", "news");
//! repo.store(&mut news).await?;
//!
//! let page = repo.fetch(&Filter::new().with_num(10)).await?;
//!
//! let cache = RedisCacheRepository::connect("redis://localhost:6379", Duration::from_secs(30)).await?;
//! cache.set("news", &news).await?;
//! let cached: Category = serde_json::from_slice(&cache.get("news").await?)?;
//! ```
//!
//! ## Testing
//!
//! Integration tests need `DATABASE_URL` (a PostgreSQL server `#[sqlx::test]` can
//! create databases on) and optionally `REDIS_TEST_URL`.
//!
//! ## Configuration
//!
//! See [`config`] for the environment variables read by [`config::load_from_env`].

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use domain::entities::{Category, Filter};
pub use error::{RepositoryError, RepositoryResult};

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::domain::entities::{Category, Filter};
    pub use crate::domain::repositories::{CacheRepository, CacheRepositoryExt, CategoryRepository};
    pub use crate::error::{RepositoryError, RepositoryResult};
    pub use crate::infrastructure::cache::RedisCacheRepository;
    pub use crate::infrastructure::persistence::PgCategoryRepository;
}
