//! Launch-data provider API client
//!
//! Issues GET requests against the provider's REST API and decodes the JSON
//! arrays it returns into our record types. Every failure is reported through
//! `UpstreamError`; no retries are attempted here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use super::{Launch, Launchpad, Rocket};

/// Base URL for the public SpaceX v4 API
pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com/v4";

pub const LAUNCHES_ENDPOINT: &str = "launches";
pub const ROCKETS_ENDPOINT: &str = "rockets";
pub const LAUNCHPADS_ENDPOINT: &str = "launchpads";

/// Errors that can occur when talking to the provider
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The provider answered with a non-2xx status
    #[error("Error fetching {endpoint}: {body}")]
    Status {
        status: u16,
        endpoint: String,
        body: String,
    },

    /// The request never produced a complete response (timeout, DNS, refused connection)
    #[error("Network error fetching {endpoint}: {source}")]
    Unavailable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON array we expected
    #[error("Malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of launch, rocket and launchpad snapshots
///
/// Implemented by `LaunchDataClient` for the real provider; the service only
/// depends on this trait.
#[async_trait]
pub trait LaunchSource: Send + Sync {
    async fn fetch_launches(&self) -> Result<Vec<Launch>, UpstreamError>;
    async fn fetch_rockets(&self) -> Result<Vec<Rocket>, UpstreamError>;
    async fn fetch_launchpads(&self) -> Result<Vec<Launchpad>, UpstreamError>;
}

/// Client for the launch-data provider's REST API
#[derive(Debug, Clone)]
pub struct LaunchDataClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL for the API, without a trailing slash
    base_url: String,
}

impl LaunchDataClient {
    /// Creates a client for `base_url` whose requests give up after `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http_client, base_url))
    }

    /// Creates a client around an existing HTTP client
    pub fn with_client(http_client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Fetches `endpoint` and decodes the body as a JSON array of `T`
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - All records in provider order
    /// * `Err(UpstreamError::Status)` - Non-2xx status, with the provider's body
    /// * `Err(UpstreamError::Unavailable)` - Transport failure
    /// * `Err(UpstreamError::Decode)` - Body is not an array of `T`
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, UpstreamError> {
        let url = self.endpoint_url(endpoint);
        debug!(%url, "fetching from upstream");

        let unavailable = |source| UpstreamError::Unavailable {
            endpoint: endpoint.to_string(),
            source,
        };

        let response = self.http_client.get(&url).send().await.map_err(unavailable)?;
        let status = response.status();

        if !status.is_success() {
            // The status alone decides the error; a truncated body is still reported
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint, status = status.as_u16(), "upstream returned an error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                body,
            });
        }

        let text = response.text().await.map_err(unavailable)?;

        serde_json::from_str(&text).map_err(|source| {
            warn!(endpoint, error = %source, "upstream response did not decode");
            UpstreamError::Decode {
                endpoint: endpoint.to_string(),
                source,
            }
        })
    }
}

#[async_trait]
impl LaunchSource for LaunchDataClient {
    async fn fetch_launches(&self) -> Result<Vec<Launch>, UpstreamError> {
        self.fetch(LAUNCHES_ENDPOINT).await
    }

    async fn fetch_rockets(&self) -> Result<Vec<Rocket>, UpstreamError> {
        self.fetch(ROCKETS_ENDPOINT).await
    }

    async fn fetch_launchpads(&self) -> Result<Vec<Launchpad>, UpstreamError> {
        self.fetch(LAUNCHPADS_ENDPOINT).await
    }
}
