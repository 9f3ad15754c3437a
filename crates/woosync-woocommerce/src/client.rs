//! HTTP client for the WooCommerce REST API customers endpoint.
//!
//! Wraps `reqwest` with store-specific error handling, REST key
//! authentication, and typed response deserialization. Transient errors
//! (429, 5xx, network failures) are retried with exponential back-off.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::WooError;
use crate::retry::retry_with_backoff;
use crate::types::WooCustomer;

/// Maximum number of pages to fetch before returning an error.
/// Prevents infinite loops if the store keeps returning full pages.
///
/// Note: each page request may be retried up to `max_retries` times on
/// transient errors, so the effective worst-case request count is
/// `MAX_PAGES * (1 + max_retries)`.
const MAX_PAGES: usize = 500;

/// Client for a WooCommerce store's REST API.
///
/// Manages the HTTP client, REST credentials, and store base URL. Point
/// `base_url` at the store root (e.g. `https://shop.example.com`); the
/// client resolves the `wp-json/wc/v3` route itself.
pub struct WooClient {
    client: Client,
    base_url: Url,
    consumer_key: String,
    consumer_secret: String,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in milliseconds for exponential back-off.
    backoff_base_ms: u64,
}

impl WooClient {
    /// Creates a client for the store at `base_url`.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors (429, 5xx, network errors). Set to `0`
    /// to disable retries. `backoff_base_ms` controls the base delay for
    /// exponential back-off: the wait before the n-th retry is
    /// `backoff_base_ms * 2^(n-1)` milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`WooError::InvalidBaseUrl`] if `base_url` is not
    /// a valid URL.
    pub fn new(
        base_url: &str,
        consumer_key: &str,
        consumer_secret: &str,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, WooError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join resolves the API route under the store root rather than
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| WooError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
            consumer_key: consumer_key.to_owned(),
            consumer_secret: consumer_secret.to_owned(),
            max_retries,
            backoff_base_ms,
        })
    }

    /// Fetches one page of customers, with automatic retry on transient
    /// errors.
    ///
    /// Pages are 1-based. The store is asked to order results by customer
    /// ID ascending so the page walk is stable across requests.
    ///
    /// # Errors
    ///
    /// - [`WooError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`WooError::NotFound`] — HTTP 404 (not retried); usually means the
    ///   REST API is disabled or the route is not registered on this store.
    /// - [`WooError::UnexpectedStatus`] — any other non-2xx status (5xx
    ///   retried, 4xx not).
    /// - [`WooError::Http`] — network or TLS failure after all retries
    ///   exhausted.
    /// - [`WooError::Deserialize`] — response body is not a JSON array of
    ///   customers (not retried).
    pub async fn fetch_customers_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<WooCustomer>, WooError> {
        let url = self.customers_url(page, per_page)?;

        // REST credentials travel in the query string, so errors carry the
        // URL with the query stripped.
        let mut display_url = url.clone();
        display_url.set_query(None);
        let display_url = display_url.to_string();

        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            let display_url = display_url.clone();
            async move {
                let response = self.client.get(url).send().await?;
                let status = response.status();

                if status == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);

                    return Err(WooError::RateLimited {
                        url: display_url,
                        retry_after_secs,
                    });
                }

                if status == StatusCode::NOT_FOUND {
                    return Err(WooError::NotFound { url: display_url });
                }

                if !status.is_success() {
                    return Err(WooError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: display_url,
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<Vec<WooCustomer>>(&body).map_err(|e| {
                    WooError::Deserialize {
                        context: format!("customers page {page}"),
                        source: e,
                    }
                })
            }
        })
        .await
    }

    /// Fetches every customer from the store by walking pages until a short
    /// page (fewer than `per_page` records) is returned.
    ///
    /// `inter_request_delay_ms` is the delay in milliseconds between page
    /// requests (applied after every page except the first).
    ///
    /// **All-or-nothing semantics**: on any page failure (network error,
    /// rate limit, pagination limit), already-fetched customers from earlier
    /// pages are discarded and the error is returned, so a sync run never
    /// sees a partial customer list.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_customers_page`].
    /// Returns [`WooError::PaginationLimit`] if the number of pages exceeds
    /// [`MAX_PAGES`].
    pub async fn fetch_all_customers(
        &self,
        per_page: u32,
        inter_request_delay_ms: u64,
    ) -> Result<Vec<WooCustomer>, WooError> {
        let mut all_customers: Vec<WooCustomer> = Vec::new();
        let mut page = 1u32;
        let mut is_first_page = true;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(WooError::PaginationLimit {
                    url: self.base_url.to_string(),
                    max_pages: MAX_PAGES,
                });
            }

            if !is_first_page && inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }
            is_first_page = false;

            let batch = self.fetch_customers_page(page, per_page).await?;
            let batch_len = batch.len();
            all_customers.extend(batch);

            // A short page means the walk is complete.
            if batch_len < per_page as usize {
                break;
            }
            page += 1;
        }

        Ok(all_customers)
    }

    /// Builds the customers endpoint URL for one page, with REST credentials
    /// and paging parameters percent-encoded into the query string.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::InvalidBaseUrl`] if the API route cannot be
    /// joined onto the configured base URL.
    fn customers_url(&self, page: u32, per_page: u32) -> Result<Url, WooError> {
        let mut url =
            self.base_url
                .join("wp-json/wc/v3/customers")
                .map_err(|e| WooError::InvalidBaseUrl {
                    base_url: self.base_url.to_string(),
                    reason: e.to_string(),
                })?;

        url.query_pairs_mut()
            .append_pair("consumer_key", &self.consumer_key)
            .append_pair("consumer_secret", &self.consumer_secret)
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string())
            .append_pair("orderby", "id")
            .append_pair("order", "asc");

        Ok(url)
    }
}
