use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub log_level: String,
    pub countries_path: PathBuf,
    /// Default customer group assigned to every imported customer.
    pub customer_group: String,
    pub store_base_url: String,
    pub store_consumer_key: String,
    pub store_consumer_secret: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub store_request_timeout_secs: u64,
    pub store_per_page: u32,
    pub store_inter_request_delay_ms: u64,
    pub store_max_retries: u32,
    pub store_retry_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("countries_path", &self.countries_path)
            .field("customer_group", &self.customer_group)
            .field("database_url", &"[redacted]")
            .field("store_base_url", &self.store_base_url)
            .field("store_consumer_key", &"[redacted]")
            .field("store_consumer_secret", &"[redacted]")
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field(
                "store_request_timeout_secs",
                &self.store_request_timeout_secs,
            )
            .field("store_per_page", &self.store_per_page)
            .field(
                "store_inter_request_delay_ms",
                &self.store_inter_request_delay_ms,
            )
            .field("store_max_retries", &self.store_max_retries)
            .field(
                "store_retry_backoff_base_ms",
                &self.store_retry_backoff_base_ms,
            )
            .finish()
    }
}
