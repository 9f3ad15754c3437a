//! Customer import from a WooCommerce storefront into the backend.
//!
//! The importer walks fetched customer records one at a time, skipping
//! records that already exist or carry no usable address, and creating a
//! customer with its billing/shipping addresses and a contact for the rest.
//! Every create attempt leaves a row in the sync log; failures never abort
//! the batch.

use serde_json::Value;
use sqlx::PgPool;

use woosync_core::NewSyncLog;
use woosync_db::append_sync_log;
use woosync_woocommerce::WooCustomer;

pub mod address;
pub mod contact;
pub mod customer;
pub mod error;
pub mod states;
pub mod sync;

pub use customer::{import_customer, ImportAction};
pub use error::{ImportError, SyncError};
pub use states::{resolve_state, state_full_name};
pub use sync::{sync_customers, SyncTotals};

/// Serializes the raw storefront payload for a sync log row.
pub(crate) fn payload_json(customer: &WooCustomer) -> Value {
    serde_json::to_value(customer).unwrap_or_default()
}

/// Writes an Error row to the sync log. A failed write is traced and
/// dropped; the import loop never aborts on a logging failure.
pub(crate) async fn record_error_log(pool: &PgPool, log: &NewSyncLog) {
    if let Err(e) = append_sync_log(pool, log).await {
        tracing::error!(error = %e, title = %log.title, "failed to append sync log row");
    }
}
