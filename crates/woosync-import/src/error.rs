use thiserror::Error;

use woosync_db::DbError;
use woosync_woocommerce::WooError;

/// Errors raised on the create path of a single customer import.
///
/// Only [`ImportError::InvalidState`] originates in the importer itself;
/// everything else is persistence trouble surfacing through [`DbError`].
/// Both are caught by the customer importer and turned into sync log rows.
#[derive(Debug, Error)]
pub enum ImportError {
    /// An Indian address carried a state abbreviation outside the known
    /// mapping. The message matches what the storefront operator sees.
    #[error("Invalid state. Please select a valid state from available options")]
    InvalidState { state: String },

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Errors a full sync run can propagate to the caller.
///
/// Per-customer failures are recorded in the sync log and never surface
/// here; only a feed fetch failure aborts the run.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Woo(#[from] WooError),
}

/// Renders an error with its source chain, one cause per line, for the
/// `message` column of a sync log row.
#[must_use]
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str("\ncaused by: ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
