//! HTTP client for the external seed dataset.
//!
//! Fetches a JSON array of transaction objects (field names `title`,
//! `description`, `price`, `category`, `image`, `dateOfSale`, `sold`) using
//! [`reqwest`]. The whole body is parsed before anything is written, so an
//! unreachable or malformed source never touches the store.

use std::time::Duration;

use salesboard_db::models::transaction::CreateTransaction;

use crate::config::SeedConfig;

/// Dataset loaded by `GET /api/transactions/init` unless `SEED_URL` is set.
pub const DEFAULT_SEED_URL: &str =
    "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// Errors from fetching or decoding the seed dataset.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The seed source returned a non-2xx status code.
    #[error("Seed source returned HTTP {status}: {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not a JSON array of transactions.
    #[error("Seed data could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client bound to one seed URL.
pub struct SeedClient {
    client: reqwest::Client,
    url: String,
}

impl SeedClient {
    /// Build a client with the configured timeout.
    pub fn new(config: &SeedConfig) -> Result<Self, SeedError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.url.clone()))
    }

    /// Create a seed client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download and decode the dataset.
    pub async fn fetch(&self) -> Result<Vec<CreateTransaction>, SeedError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SeedError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
