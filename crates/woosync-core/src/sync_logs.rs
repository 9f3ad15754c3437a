use serde::{Deserialize, Serialize};

/// Outcome of one create attempt, as recorded in the sync log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncStatus {
    Success,
    Error,
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncStatus::Success => write!(f, "Success"),
            SyncStatus::Error => write!(f, "Error"),
        }
    }
}

/// An append-only sync log row describing one create attempt, success or
/// failure, with the raw storefront payload it was working from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSyncLog {
    pub title: String,
    pub status: SyncStatus,
    /// Importer operation that produced the entry, e.g. `"create_customer"`.
    pub method: String,
    pub message: String,
    pub request_data: serde_json::Value,
    pub is_exception: bool,
}

impl NewSyncLog {
    #[must_use]
    pub fn success(
        method: &str,
        title: &str,
        message: &str,
        request_data: serde_json::Value,
    ) -> Self {
        NewSyncLog {
            title: title.to_string(),
            status: SyncStatus::Success,
            method: method.to_string(),
            message: message.to_string(),
            request_data,
            is_exception: false,
        }
    }

    #[must_use]
    pub fn error(
        method: &str,
        title: &str,
        message: &str,
        request_data: serde_json::Value,
    ) -> Self {
        NewSyncLog {
            title: title.to_string(),
            status: SyncStatus::Error,
            method: method.to_string(),
            message: message.to_string(),
            request_data,
            is_exception: true,
        }
    }
}
