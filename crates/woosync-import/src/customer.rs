//! Customer import: existence check, address gating, and the create path.

use sqlx::PgPool;

use woosync_core::{display_name, AppConfig, NewCustomer, NewSyncLog};
use woosync_db::{
    append_sync_log, country_name_by_code, customer_name_by_woo_id, insert_customer,
    root_territory, territory_exists, DbError,
};
use woosync_woocommerce::{WooAddress, WooCustomer};

use crate::address::create_customer_addresses;
use crate::contact::create_customer_contact;
use crate::error::{error_chain, ImportError};
use crate::{payload_json, record_error_log};

/// What happened to one storefront record during import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportAction {
    /// A new customer, with its addresses and contact, was created.
    Created,
    /// A customer with this storefront ID already exists; left untouched.
    SkippedExisting,
    /// Billing or shipping is missing its first address line; skipped
    /// without a sync log entry.
    SkippedNoAddress,
    /// The create path failed; an Error row was written to the sync log.
    Failed,
}

/// Imports one storefront customer record.
///
/// Existing customers are left untouched and records without both address
/// lines are skipped silently. Everything else goes through the create
/// path, which writes its own Success or Error row to the sync log and
/// pushes the storefront ID onto `imported` when the customer was created.
///
/// # Errors
///
/// Returns [`DbError`] only when the existence lookup itself fails; create
/// path failures are recorded in the sync log and reported as
/// [`ImportAction::Failed`].
pub async fn import_customer(
    pool: &PgPool,
    config: &AppConfig,
    raw: &WooCustomer,
    imported: &mut Vec<i64>,
) -> Result<ImportAction, DbError> {
    if customer_name_by_woo_id(pool, raw.id).await?.is_some() {
        return Ok(update_customer(raw));
    }

    // Only customers with both address lines are worth importing; the rest
    // are skipped without a sync log entry.
    let (billing, shipping) = match (&raw.billing, &raw.shipping) {
        (Some(billing), Some(shipping)) => (billing, shipping),
        _ => return Ok(ImportAction::SkippedNoAddress),
    };
    if billing.address_1.is_empty() || shipping.address_1.is_empty() {
        return Ok(ImportAction::SkippedNoAddress);
    }

    Ok(create_customer(pool, config, raw, billing, imported).await)
}

/// The update path is a deliberate no-op: customers that already exist in
/// the backend are not modified by the sync.
fn update_customer(_raw: &WooCustomer) -> ImportAction {
    ImportAction::SkippedExisting
}

/// Runs the create path, turning any failure into an Error sync log row.
async fn create_customer(
    pool: &PgPool,
    config: &AppConfig,
    raw: &WooCustomer,
    billing: &WooAddress,
    imported: &mut Vec<i64>,
) -> ImportAction {
    match try_create_customer(pool, config, raw, billing, imported).await {
        Ok(()) => ImportAction::Created,
        Err(e) => {
            tracing::error!(error = %e, woo_customer_id = raw.id, "customer create failed");
            let log = NewSyncLog::error(
                "create_customer",
                &e.to_string(),
                &error_chain(&e),
                payload_json(raw),
            );
            record_error_log(pool, &log).await;
            ImportAction::Failed
        }
    }
}

async fn try_create_customer(
    pool: &PgPool,
    config: &AppConfig,
    raw: &WooCustomer,
    billing: &WooAddress,
    imported: &mut Vec<i64>,
) -> Result<(), ImportError> {
    let territory = resolve_territory(pool, billing).await?;

    let customer = NewCustomer {
        name: raw.id.to_string(),
        customer_name: display_name(&raw.first_name, &raw.last_name, &raw.email),
        woo_customer_id: raw.id,
        sync_with_woocommerce: false,
        customer_group: config.customer_group.clone(),
        territory,
        customer_type: "Individual".to_string(),
    };

    // Each statement commits on its own, so the customer row is durable
    // before the addresses and contact reference it.
    insert_customer(pool, &customer).await?;
    tracing::debug!(
        name = %customer.name,
        customer_name = %customer.customer_name,
        territory = %customer.territory,
        "created new customer"
    );

    create_customer_addresses(pool, raw, &customer.name).await?;
    create_customer_contact(pool, &customer.name, billing, raw).await;

    imported.push(raw.id);

    let log = NewSyncLog::success(
        "create_customer",
        "create customer",
        "create customer",
        payload_json(raw),
    );
    append_sync_log(pool, &log).await?;

    Ok(())
}

/// Matches the canonical name of the billing country against the territory
/// tree, defaulting to the root when there is no match.
async fn resolve_territory(pool: &PgPool, billing: &WooAddress) -> Result<String, DbError> {
    if let Some(country_name) = country_name_by_code(pool, &billing.country).await? {
        if territory_exists(pool, &country_name).await? {
            return Ok(country_name);
        }
    }
    root_territory(pool).await
}
