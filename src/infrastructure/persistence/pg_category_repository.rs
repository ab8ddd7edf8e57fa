//! PostgreSQL implementation of category repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::{Category, Filter};
use crate::domain::repositories::CategoryRepository;
use crate::error::{RepositoryError, RepositoryResult};
use crate::utils::db_error::is_unique_violation_on_slug;

const SELECT_CATEGORY: &str = "SELECT id, name, slug, created_at, updated_at FROM category";

/// PostgreSQL repository for categories.
///
/// Holds nothing but the shared pool; safe to use from many tasks at once.
/// Concurrent writes to the same row are serialized by PostgreSQL.
pub struct PgCategoryRepository {
    pool: Arc<PgPool>,
}

impl PgCategoryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Builds the listing query for `filter`.
///
/// The cursor is bound as text and cast by PostgreSQL, so a non-numeric cursor
/// surfaces as a database error.
pub(crate) fn fetch_query(filter: &Filter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_CATEGORY);

    if let Some(cursor) = filter.cursor() {
        builder.push(" WHERE id < ");
        builder.push_bind(cursor.to_owned());
        builder.push("::BIGINT");
    }

    if let Some(keyword) = filter.keyword() {
        builder.push(if filter.cursor().is_some() {
            " AND "
        } else {
            " WHERE "
        });
        builder.push("name ILIKE ");
        builder.push_bind(format!("%{keyword}%"));
    }

    builder.push(" ORDER BY id DESC");

    if let Some(limit) = filter.limit() {
        builder.push(" LIMIT ");
        builder.push_bind(limit);
    }

    builder
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn store(&self, category: &mut Category) -> RepositoryResult<()> {
        let now = Utc::now();

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO category (name, slug, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&category.name)
        .bind(&category.slug)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_slug(&e) {
                warn!(slug = %category.slug, "Duplicate category slug");
                RepositoryError::DuplicateKey
            } else {
                e.into()
            }
        })?;

        category.id = id;
        category.created_at = now;
        category.updated_at = now;

        debug!(id, slug = %category.slug, "Category stored");
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Category> {
        let category = sqlx::query_as::<_, Category>(&format!("{SELECT_CATEGORY} WHERE id = $1"))
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(category)
    }

    async fn get_by_slug(&self, slug: &str) -> RepositoryResult<Category> {
        let category =
            sqlx::query_as::<_, Category>(&format!("{SELECT_CATEGORY} WHERE slug = $1"))
                .bind(slug)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(category)
    }

    async fn fetch(&self, filter: &Filter) -> RepositoryResult<Vec<Category>> {
        let mut builder = fetch_query(filter);

        let categories = builder
            .build_query_as::<Category>()
            .fetch_all(self.pool.as_ref())
            .await?;

        debug!(?filter, count = categories.len(), "Categories fetched");
        Ok(categories)
    }

    async fn update(&self, category: &mut Category) -> RepositoryResult<()> {
        let now = Utc::now();

        let result = sqlx::query("UPDATE category SET name = $1, updated_at = $2 WHERE id = $3")
            .bind(&category.name)
            .bind(now)
            .bind(category.id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NoRowsAffected);
        }

        category.updated_at = now;

        debug!(id = category.id, "Category updated");
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NoRowsAffected);
        }

        debug!(id, "Category deleted");
        Ok(())
    }
}
