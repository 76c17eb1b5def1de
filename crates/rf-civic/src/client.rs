//! Civic-information API client for representative lookups.
//!
//! The trait abstraction keeps the normalizer and application logic testable
//! without network access:
//!
//! - Unit tests use [`mock::MockCivicClient`]
//! - Integration tests point [`HttpCivicClient`] at a `wiremock` server
//!
//! # Example
//!
//! ```ignore
//! use rf_civic::{CivicApiClient, HttpCivicClient, DEFAULT_BASE_URL};
//!
//! let client = HttpCivicClient::new(DEFAULT_BASE_URL, "my-api-key");
//! let payload = client.representatives("90210").await?;
//! ```

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Google Civic Information API v2.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/civicinfo/v2";

/// Errors that can occur when calling the civic-information API.
#[derive(Debug, Error)]
pub enum CivicApiError {
    /// HTTP request failed (connection, timeout, or undecodable body)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
}

/// Trait for civic-information lookups.
///
/// Returns the raw JSON payload; use [`crate::normalize`] to turn it into
/// records. Implementations make a single attempt with no retry.
#[async_trait]
pub trait CivicApiClient: Send + Sync {
    /// Fetch the offices and officials representing `address`.
    async fn representatives(&self, address: &str) -> Result<Value, CivicApiError>;
}

/// HTTP-based implementation of `CivicApiClient`.
pub struct HttpCivicClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpCivicClient {
    /// Create a new client with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create a client with a custom `reqwest::Client` (for timeouts or testing).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CivicApiClient for HttpCivicClient {
    async fn representatives(&self, address: &str) -> Result<Value, CivicApiError> {
        let url = format!("{}/representatives", self.base_url.trim_end_matches('/'));

        tracing::debug!(%url, address, "requesting representatives");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("address", address)])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CivicApiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{CivicApiClient, CivicApiError, Value};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock implementation of `CivicApiClient` for unit tests.
    ///
    /// Queue responses with `push_result`; unqueued calls return an empty
    /// payload. Recorded addresses are available from `calls()`.
    pub struct MockCivicClient {
        results: Mutex<Vec<Result<Value, CivicApiError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockCivicClient {
        pub fn new() -> Self {
            Self {
                results: Mutex::new(Vec::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Mock whose first call returns `payload`.
        pub fn with_payload(payload: Value) -> Self {
            let mock = Self::new();
            mock.push_result(Ok(payload));
            mock
        }

        /// Queue the result for the next `representatives` call.
        pub fn push_result(&self, result: Result<Value, CivicApiError>) {
            self.results.lock().unwrap().push(result);
        }

        /// All addresses passed to `representatives`, in call order.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockCivicClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl CivicApiClient for MockCivicClient {
        async fn representatives(&self, address: &str) -> Result<Value, CivicApiError> {
            self.calls.lock().unwrap().push(address.to_string());

            let mut results = self.results.lock().unwrap();
            if results.is_empty() {
                Ok(Value::Object(serde_json::Map::new()))
            } else {
                results.remove(0)
            }
        }
    }
}
