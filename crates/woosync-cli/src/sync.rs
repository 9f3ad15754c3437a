//! Storefront sync command handlers for the CLI.
//!
//! These are called from `main` after the database pool and config are
//! established. Per-customer failures are recorded in the sync log and
//! skipped inside the importer rather than propagated, so a single bad
//! record does not abort the full run.

use clap::Subcommand;
use woosync_woocommerce::WooClient;

/// Sub-commands available under `sync`.
#[derive(Debug, Subcommand)]
pub enum SyncCommands {
    /// Import storefront customers into the backend
    Customers {
        /// Preview what would be imported without writing to the database
        #[arg(long)]
        dry_run: bool,
    },
}

/// Import customers from the storefront into the backend.
///
/// When `dry_run` is `true` the function fetches the current customer feed,
/// reports what a real run would do, and returns without writing anything.
///
/// # Errors
///
/// Returns an error if the storefront client cannot be constructed or the
/// customer feed cannot be fetched. Per-customer import failures are recorded
/// in the sync log and skipped, not propagated.
pub(crate) async fn run_sync_customers(
    pool: &sqlx::PgPool,
    config: &woosync_core::AppConfig,
    dry_run: bool,
) -> anyhow::Result<()> {
    let client = WooClient::new(
        &config.store_base_url,
        &config.store_consumer_key,
        &config.store_consumer_secret,
        config.store_request_timeout_secs,
        config.store_max_retries,
        config.store_retry_backoff_base_ms,
    )
    .map_err(|e| anyhow::anyhow!("failed to build storefront client: {e}"))?;

    if dry_run {
        let customers = client
            .fetch_all_customers(config.store_per_page, config.store_inter_request_delay_ms)
            .await?;
        let total = customers.len();

        let mut would_import: usize = 0;
        let mut already_imported: usize = 0;
        let mut without_address: usize = 0;
        for customer in &customers {
            if woosync_db::customer_name_by_woo_id(pool, customer.id)
                .await?
                .is_some()
            {
                already_imported += 1;
                continue;
            }
            let has_full_address = match (&customer.billing, &customer.shipping) {
                (Some(billing), Some(shipping)) => {
                    !billing.address_1.is_empty() && !shipping.address_1.is_empty()
                }
                _ => false,
            };
            if has_full_address {
                would_import += 1;
            } else {
                without_address += 1;
            }
        }

        println!(
            "dry-run: would import {would_import} of {total} customers \
             ({already_imported} already imported, {without_address} without a full address)"
        );
        return Ok(());
    }

    let totals = woosync_import::sync_customers(pool, &client, config).await?;
    println!("imported {} customers from the storefront", totals.customers);

    Ok(())
}
