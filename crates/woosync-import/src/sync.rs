//! Full sync run: fetch every storefront customer and import each one.

use sqlx::PgPool;

use woosync_core::AppConfig;
use woosync_woocommerce::WooClient;

use crate::customer::import_customer;
use crate::error::SyncError;

/// Counts reported by a completed sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncTotals {
    /// Customers actually created during this run. Existing customers and
    /// skipped records are not counted.
    pub customers: usize,
}

/// Fetches all customers from the storefront and imports each one.
///
/// Customers are processed strictly in order, one at a time. Per-customer
/// failures are written to the sync log (or traced, for existence-lookup
/// failures) and never abort the run.
///
/// # Errors
///
/// Returns [`SyncError::Woo`] when the feed fetch fails. Nothing has been
/// imported in that case: the fetch runs to completion before the first
/// import.
pub async fn sync_customers(
    pool: &PgPool,
    client: &WooClient,
    config: &AppConfig,
) -> Result<SyncTotals, SyncError> {
    let customers = client
        .fetch_all_customers(config.store_per_page, config.store_inter_request_delay_ms)
        .await?;
    tracing::info!(fetched = customers.len(), "fetched storefront customers");

    let mut imported: Vec<i64> = Vec::new();
    for customer in &customers {
        match import_customer(pool, config, customer, &mut imported).await {
            Ok(action) => {
                tracing::debug!(
                    woo_customer_id = customer.id,
                    action = ?action,
                    "customer processed"
                );
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    woo_customer_id = customer.id,
                    "skipping customer after lookup failure"
                );
            }
        }
    }

    let totals = SyncTotals {
        customers: imported.len(),
    };
    tracing::info!(created = totals.customers, "customer sync complete");
    Ok(totals)
}
