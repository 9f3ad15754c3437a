//! Database operations for the `addresses` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use woosync_core::NewAddress;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `addresses` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AddressRow {
    pub id: i64,
    pub address_title: String,
    /// `"Billing"` or `"Shipping"`.
    pub address_type: String,
    pub company_name: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Inserts an address row and returns its generated id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails (including a missing
/// customer reference).
pub async fn insert_address(pool: &PgPool, address: &NewAddress) -> Result<i64, DbError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO addresses \
             (address_title, address_type, company_name, address_line1, address_line2, \
              city, state, postal_code, country, phone, email, first_name, last_name, \
              customer_name) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
         RETURNING id",
    )
    .bind(&address.address_title)
    .bind(address.kind.to_string())
    .bind(&address.company_name)
    .bind(&address.address_line1)
    .bind(&address.address_line2)
    .bind(&address.city)
    .bind(&address.state)
    .bind(&address.postal_code)
    .bind(&address.country)
    .bind(&address.phone)
    .bind(&address.email)
    .bind(&address.first_name)
    .bind(&address.last_name)
    .bind(&address.customer_name)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Returns all addresses linked to a customer, oldest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_addresses_for_customer(
    pool: &PgPool,
    customer_name: &str,
) -> Result<Vec<AddressRow>, DbError> {
    let rows = sqlx::query_as::<_, AddressRow>(
        "SELECT id, address_title, address_type, company_name, address_line1, address_line2, \
                city, state, postal_code, country, phone, email, first_name, last_name, \
                customer_name, created_at \
         FROM addresses \
         WHERE customer_name = $1 \
         ORDER BY id",
    )
    .bind(customer_name)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
