//! REST client for the read-only planet / starship catalog API.
//!
//! Wraps `GET {base}/planets/{id}` and `GET {base}/starships/{id}` using
//! [`reqwest`]. Requests are never retried; a failure is returned to the
//! caller, which is expected to show it as a terminal error state.

use serde::de::DeserializeOwned;
use starport_core::types::{CraftId, PlanetId};

use crate::config::SwapiConfig;
use crate::models::{PlanetDetail, StarshipDetail};

/// HTTP client for one catalog API base URL.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the catalog API layer.
#[derive(Debug, thiserror::Error)]
pub enum SwapiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not the expected JSON object.
    #[error("Malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SwapiClient {
    /// Create a client from configuration (base URL and request timeout).
    pub fn new(config: &SwapiConfig) -> Result<Self, SwapiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// * `base_url` - API root, e.g. `https://swapi.info/api`. A trailing
    ///   slash is stripped.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch descriptive fields for a planet.
    pub async fn planet(&self, id: &PlanetId) -> Result<PlanetDetail, SwapiError> {
        self.get_json(&format!("planets/{id}")).await
    }

    /// Fetch descriptive fields for a starship.
    ///
    /// Only catalog crafts have remote details; custom ids yield a 404.
    pub async fn starship(&self, id: &CraftId) -> Result<StarshipDetail, SwapiError> {
        self.get_json(&format!("starships/{id}")).await
    }

    // ---- private helpers ----

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SwapiError> {
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!(url = %url, "Fetching catalog detail");

        let response = self.client.get(&url).send().await.inspect_err(|e| {
            tracing::warn!(url = %url, error = %e, "Catalog request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(url = %url, status = status.as_u16(), "Catalog API returned an error");
            return Err(SwapiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
