/// Name of the unique index PostgreSQL creates for `category.slug`.
pub const CATEGORY_SLUG_CONSTRAINT: &str = "category_slug_key";

pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(CATEGORY_SLUG_CONSTRAINT))
}
