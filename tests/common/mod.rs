#![allow(dead_code)]

use category_store::domain::entities::Category;
use chrono::Utc;
use sqlx::PgPool;

/// The four reference categories, ids 1..=4.
pub fn mock_categories() -> Vec<Category> {
    [(1, "Tekno", "tekno"), (2, "Bola", "bola"), (3, "Asmara", "asmara"), (4, "Celebs", "celebs")]
        .into_iter()
        .map(|(id, name, slug)| {
            let mut category = Category::new(name, slug);
            category.id = id;
            category
        })
        .collect()
}

/// Inserts [`mock_categories`] with their fixed ids and moves the id sequence past them.
pub async fn seed_categories(pool: &PgPool) {
    for category in mock_categories() {
        sqlx::query(
            "INSERT INTO category (id, name, slug, created_at, updated_at) VALUES ($1, $2, $3, $4, $4)",
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.slug)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
    }

    sqlx::query("SELECT setval(pg_get_serial_sequence('category', 'id'), (SELECT MAX(id) FROM category))")
        .execute(pool)
        .await
        .unwrap();
}

/// Reads a row directly, bypassing the repository.
pub async fn find_category_row(pool: &PgPool, id: i64) -> Option<Category> {
    sqlx::query_as::<_, Category>(
        "SELECT id, name, slug, created_at, updated_at FROM category WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .unwrap()
}

pub async fn count_categories(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM category")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn ids(categories: &[Category]) -> Vec<i64> {
    categories.iter().map(|c| c.id).collect()
}
