//! Database operations for the `countries` table.

use sqlx::PgPool;

use crate::DbError;

/// Resolves a 2-letter country code to its canonical display name.
///
/// Codes are stored lowercase, so the input is lowercased before the lookup.
/// Returns `None` when the code is unknown; callers decide what an unknown
/// country means (the address builder substitutes its fallback country).
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn country_name_by_code(pool: &PgPool, code: &str) -> Result<Option<String>, DbError> {
    let name = sqlx::query_scalar::<_, String>("SELECT name FROM countries WHERE code = $1")
        .bind(code.to_lowercase())
        .fetch_optional(pool)
        .await?;

    Ok(name)
}
