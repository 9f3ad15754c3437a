//! Database operations for the `customers` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use woosync_core::NewCustomer;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `customers` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerRow {
    /// Primary key: the storefront customer id rendered as a string.
    pub name: String,
    pub customer_name: String,
    pub woo_customer_id: i64,
    pub sync_with_woocommerce: bool,
    pub customer_group: String,
    pub territory: String,
    pub customer_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Returns the key of the customer linked to the given storefront id, or
/// `None` if no such customer exists. This is the import existence check.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn customer_name_by_woo_id(
    pool: &PgPool,
    woo_customer_id: i64,
) -> Result<Option<String>, DbError> {
    let name = sqlx::query_scalar::<_, String>(
        "SELECT name FROM customers WHERE woo_customer_id = $1",
    )
    .bind(woo_customer_id)
    .fetch_optional(pool)
    .await?;

    Ok(name)
}

/// Inserts a new customer row.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails (including unique
/// constraint violations on `name` or `woo_customer_id`).
pub async fn insert_customer(pool: &PgPool, customer: &NewCustomer) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO customers \
             (name, customer_name, woo_customer_id, sync_with_woocommerce, \
              customer_group, territory, customer_type) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(&customer.name)
    .bind(&customer.customer_name)
    .bind(customer.woo_customer_id)
    .bind(customer.sync_with_woocommerce)
    .bind(&customer.customer_group)
    .bind(&customer.territory)
    .bind(&customer.customer_type)
    .execute(pool)
    .await?;

    Ok(())
}

/// Returns a single customer by its key, or `None` if not found.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_customer(pool: &PgPool, name: &str) -> Result<Option<CustomerRow>, DbError> {
    let row = sqlx::query_as::<_, CustomerRow>(
        "SELECT name, customer_name, woo_customer_id, sync_with_woocommerce, \
                customer_group, territory, customer_type, created_at, updated_at \
         FROM customers \
         WHERE name = $1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
