//! Address construction and persistence for imported customers.

use sqlx::PgPool;

use woosync_core::{AddressKind, NewAddress, NewSyncLog};
use woosync_db::{country_name_by_code, insert_address, DbError};
use woosync_woocommerce::{WooAddress, WooCustomer};

use crate::error::{error_chain, ImportError};
use crate::states::resolve_state;
use crate::{payload_json, record_error_log};

/// Country substituted when an address carries a code outside the
/// countries table.
pub const FALLBACK_COUNTRY: &str = "Switzerland";

/// Resolves an address country code to its canonical name, substituting
/// [`FALLBACK_COUNTRY`] for unknown codes.
///
/// # Errors
///
/// Returns [`DbError`] if the lookup itself fails.
pub async fn resolve_country(pool: &PgPool, code: &str) -> Result<String, DbError> {
    let name = country_name_by_code(pool, code).await?;
    Ok(name.unwrap_or_else(|| FALLBACK_COUNTRY.to_string()))
}

/// Builds an address row from one storefront address block.
///
/// Empty optional fields become `None`. The backend requires line 1 and
/// city, so those get literal placeholders when the block leaves them
/// blank.
#[must_use]
pub fn build_address(
    kind: AddressKind,
    block: &WooAddress,
    state: Option<String>,
    country: String,
    customer_name: &str,
) -> NewAddress {
    NewAddress {
        kind,
        address_title: customer_name.to_string(),
        company_name: optional(&block.company),
        address_line1: or_placeholder(&block.address_1, "Address 1"),
        address_line2: optional(&block.address_2),
        city: or_placeholder(&block.city, "City"),
        state,
        postal_code: optional(&block.postcode),
        country,
        phone: optional(&block.phone),
        email: optional(&block.email),
        first_name: optional(&block.first_name),
        last_name: optional(&block.last_name),
        customer_name: customer_name.to_string(),
    }
}

/// Creates billing and shipping address rows for a just-created customer.
///
/// The state of each present block is resolved first; an invalid Indian
/// state abbreviation propagates and fails the whole import attempt.
/// Insert failures are confined to the failing address: they are written
/// to the sync log and the sibling address is still attempted.
///
/// # Errors
///
/// Returns [`ImportError::InvalidState`] for an unmapped Indian state, or
/// [`ImportError::Db`] if a country lookup fails.
pub async fn create_customer_addresses(
    pool: &PgPool,
    customer: &WooCustomer,
    customer_name: &str,
) -> Result<(), ImportError> {
    if let Some(billing) = &customer.billing {
        let state = resolve_state(&billing.state, &billing.country)?;
        insert_address_logged(pool, customer, billing, AddressKind::Billing, state, customer_name)
            .await?;
    }

    if let Some(shipping) = &customer.shipping {
        let state = resolve_state(&shipping.state, &shipping.country)?;
        insert_address_logged(
            pool,
            customer,
            shipping,
            AddressKind::Shipping,
            state,
            customer_name,
        )
        .await?;
    }

    Ok(())
}

async fn insert_address_logged(
    pool: &PgPool,
    customer: &WooCustomer,
    block: &WooAddress,
    kind: AddressKind,
    state: Option<String>,
    customer_name: &str,
) -> Result<(), ImportError> {
    let country = resolve_country(pool, &block.country).await?;
    let address = build_address(kind, block, state, country, customer_name);

    tracing::debug!(
        address_type = %kind,
        customer_name,
        state = ?address.state,
        "creating address"
    );

    if let Err(e) = insert_address(pool, &address).await {
        tracing::error!(
            error = %e,
            address_type = %kind,
            customer_name,
            "failed to create address"
        );
        let log = NewSyncLog::error(
            "create_customer_address",
            &e.to_string(),
            &error_chain(&e),
            payload_json(customer),
        );
        record_error_log(pool, &log).await;
    }

    Ok(())
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
