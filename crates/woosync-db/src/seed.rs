use sqlx::PgPool;
use woosync_core::CountryConfig;

use crate::DbError;

/// Upsert countries from the seed file into the database.
///
/// Codes are stored lowercase. Returns the number of countries processed
/// (inserted or updated). All upserts run inside a single transaction; if
/// any operation fails the entire batch is rolled back.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_countries(pool: &PgPool, countries: &[CountryConfig]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for country in countries {
        sqlx::query(
            "INSERT INTO countries (code, name) \
             VALUES ($1, $2) \
             ON CONFLICT (code) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 updated_at = NOW()",
        )
        .bind(country.normalized_code())
        .bind(&country.name)
        .execute(&mut *tx)
        .await?;

        count += 1;
    }

    tx.commit().await?;
    Ok(count)
}
