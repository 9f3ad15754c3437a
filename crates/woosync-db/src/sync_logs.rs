//! Database operations for the `sync_logs` table.
//!
//! Sync logs are append-only: one row per create attempt, success or
//! failure, carrying the raw storefront payload for operator review.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use woosync_core::NewSyncLog;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `sync_logs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SyncLogRow {
    pub id: i64,
    pub title: String,
    /// `"Success"` or `"Error"`.
    pub status: String,
    pub method: String,
    pub message: String,
    pub request_data: serde_json::Value,
    pub is_exception: bool,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Appends one sync log row and returns its generated id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn append_sync_log(pool: &PgPool, log: &NewSyncLog) -> Result<i64, DbError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO sync_logs (title, status, method, message, request_data, is_exception) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING id",
    )
    .bind(&log.title)
    .bind(log.status.to_string())
    .bind(&log.method)
    .bind(&log.message)
    .bind(&log.request_data)
    .bind(log.is_exception)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Returns the most recent `limit` sync log rows, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_sync_logs(pool: &PgPool, limit: i64) -> Result<Vec<SyncLogRow>, DbError> {
    let rows = sqlx::query_as::<_, SyncLogRow>(
        "SELECT id, title, status, method, message, request_data, is_exception, created_at \
         FROM sync_logs \
         ORDER BY created_at DESC, id DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
