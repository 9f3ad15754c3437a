//! HTTP client for the WooCommerce REST API (customers endpoint).
//!
//! Wraps `reqwest` with typed errors, consumer key/secret query
//! authentication, page-number pagination, and automatic retry with
//! exponential back-off on transient failures.

pub mod client;
pub mod error;
mod retry;
pub mod types;

pub use client::WooClient;
pub use error::WooError;
pub use types::{WooAddress, WooCustomer};
