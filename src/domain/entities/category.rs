//! Category entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A blog category.
///
/// `id` is assigned by the database on insert and doubles as the pagination
/// cursor. Timestamps are maintained by the repository and are not part of the
/// serialized representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Creates an unsaved category. The id stays `0` until the repository stores it.
    ///
    /// # Examples
    ///
    /// ```
    /// use category_store::domain::entities::Category;
    ///
    /// let news = Category::new("News", "news");
    /// assert!(!news.is_persisted());
    /// ```
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            slug: slug.into(),
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
        }
    }

    /// Returns `true` once the database has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}
