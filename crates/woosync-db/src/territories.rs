//! Database operations for the `territories` table.
//!
//! Territories form a tree via the nullable `parent` column; the single row
//! with `parent IS NULL` is the root every import falls back to when no
//! territory matches the customer's country.

use sqlx::PgPool;

use crate::DbError;

/// Returns whether a territory with the given name exists.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn territory_exists(pool: &PgPool, name: &str) -> Result<bool, DbError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM territories WHERE name = $1)",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Returns the name of the root territory.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no root row exists (the seed has not
/// run), or [`DbError::Sqlx`] if the query fails.
pub async fn root_territory(pool: &PgPool) -> Result<String, DbError> {
    let name = sqlx::query_scalar::<_, String>(
        "SELECT name FROM territories WHERE parent IS NULL ORDER BY name LIMIT 1",
    )
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(name)
}

/// Creates the root territory if it does not exist yet.
///
/// Returns `true` if a row was created, `false` if a root was already
/// present (in which case the existing root wins, whatever its name).
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn ensure_root_territory(pool: &PgPool, name: &str) -> Result<bool, DbError> {
    let result = sqlx::query(
        "INSERT INTO territories (name, parent, is_group) \
         SELECT $1, NULL, true \
         WHERE NOT EXISTS (SELECT 1 FROM territories WHERE parent IS NULL)",
    )
    .bind(name)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
