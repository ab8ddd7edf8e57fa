//! Repository trait for category persistence.

use crate::domain::entities::{Category, Filter};
use crate::error::RepositoryResult;
use async_trait::async_trait;

/// Repository interface for storing and querying categories.
///
/// Every method is a single round trip to the database. Dropping the returned
/// future cancels the in-flight query.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] - PostgreSQL implementation
///
/// # Examples
///
/// See integration tests: `tests/repository_category.rs`
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Inserts a new category and sets its `id` and timestamps in place.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateKey`](crate::error::RepositoryError::DuplicateKey)
    /// if the slug is already taken.
    async fn store(&self, category: &mut Category) -> RepositoryResult<()>;

    /// Finds a category by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`](crate::error::RepositoryError::NotFound)
    /// if no row matches.
    async fn get_by_id(&self, id: i64) -> RepositoryResult<Category>;

    /// Finds a category by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`](crate::error::RepositoryError::NotFound)
    /// if no row matches.
    async fn get_by_slug(&self, slug: &str) -> RepositoryResult<Category>;

    /// Lists categories newest first, shaped by `filter`.
    ///
    /// Returns an empty vector when nothing matches.
    async fn fetch(&self, filter: &Filter) -> RepositoryResult<Vec<Category>>;

    /// Renames the category identified by `category.id` and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NoRowsAffected`](crate::error::RepositoryError::NoRowsAffected)
    /// if the id does not exist.
    async fn update(&self, category: &mut Category) -> RepositoryResult<()>;

    /// Deletes the category with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NoRowsAffected`](crate::error::RepositoryError::NoRowsAffected)
    /// if the id does not exist.
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
