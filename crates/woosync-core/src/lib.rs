//! Core domain types and configuration for the WooCommerce customer sync.
//!
//! This crate is dependency-light on purpose: it defines the normalized
//! entities the importer writes (customers, addresses, contacts, sync logs),
//! the application configuration loaded from the environment, and the
//! countries seed file format. Persistence and HTTP live in sibling crates.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod countries;
pub mod customers;
pub mod sync_logs;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use countries::{load_countries, CountriesFile, CountryConfig};
pub use customers::{
    display_name, AddressKind, ContactEmail, ContactPhone, NewAddress, NewContact, NewCustomer,
};
pub use sync_logs::{NewSyncLog, SyncStatus};

/// Errors raised while loading configuration from the environment or from
/// the countries seed file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable was set but could not be parsed.
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    /// The countries seed file could not be read.
    #[error("failed to read countries file at {path}")]
    CountriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The countries seed file could not be parsed as YAML.
    #[error("failed to parse countries file")]
    CountriesFileParse(#[source] serde_yaml::Error),

    /// The countries seed file parsed but failed validation.
    #[error("{0}")]
    Validation(String),
}
