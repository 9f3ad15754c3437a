//! Database operations for the `contacts` table and its email/phone child tables.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use woosync_core::NewContact;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `contacts` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
}

/// A row from the `contact_emails` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactEmailRow {
    pub id: i64,
    pub contact_id: i64,
    pub email: String,
    pub is_primary: bool,
}

/// A row from the `contact_phones` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactPhoneRow {
    pub id: i64,
    pub contact_id: i64,
    pub phone: String,
    pub is_primary: bool,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Inserts a contact together with its email and phone entries.
///
/// The contact row and all child rows are written in a single transaction;
/// a failure on any child rolls back the whole contact. Returns the
/// generated contact id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any insert fails (including a missing
/// customer reference).
pub async fn insert_contact(pool: &PgPool, contact: &NewContact) -> Result<i64, DbError> {
    let mut tx = pool.begin().await?;

    let contact_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO contacts (first_name, last_name, customer_name) \
         VALUES ($1, $2, $3) \
         RETURNING id",
    )
    .bind(&contact.first_name)
    .bind(&contact.last_name)
    .bind(&contact.customer_name)
    .fetch_one(&mut *tx)
    .await?;

    for entry in &contact.emails {
        sqlx::query(
            "INSERT INTO contact_emails (contact_id, email, is_primary) \
             VALUES ($1, $2, $3)",
        )
        .bind(contact_id)
        .bind(&entry.email)
        .bind(entry.is_primary)
        .execute(&mut *tx)
        .await?;
    }

    for entry in &contact.phones {
        sqlx::query(
            "INSERT INTO contact_phones (contact_id, phone, is_primary) \
             VALUES ($1, $2, $3)",
        )
        .bind(contact_id)
        .bind(&entry.phone)
        .bind(entry.is_primary)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(contact_id)
}

/// Returns all contacts linked to a customer, oldest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_contacts_for_customer(
    pool: &PgPool,
    customer_name: &str,
) -> Result<Vec<ContactRow>, DbError> {
    let rows = sqlx::query_as::<_, ContactRow>(
        "SELECT id, first_name, last_name, customer_name, created_at \
         FROM contacts \
         WHERE customer_name = $1 \
         ORDER BY id",
    )
    .bind(customer_name)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns all email entries for a contact, oldest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_contact_emails(
    pool: &PgPool,
    contact_id: i64,
) -> Result<Vec<ContactEmailRow>, DbError> {
    let rows = sqlx::query_as::<_, ContactEmailRow>(
        "SELECT id, contact_id, email, is_primary \
         FROM contact_emails \
         WHERE contact_id = $1 \
         ORDER BY id",
    )
    .bind(contact_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns all phone entries for a contact, oldest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_contact_phones(
    pool: &PgPool,
    contact_id: i64,
) -> Result<Vec<ContactPhoneRow>, DbError> {
    let rows = sqlx::query_as::<_, ContactPhoneRow>(
        "SELECT id, contact_id, phone, is_primary \
         FROM contact_phones \
         WHERE contact_id = $1 \
         ORDER BY id",
    )
    .bind(contact_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
