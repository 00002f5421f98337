//! Tracking page client

use crate::models::Config;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

pub const FIELD_TRACKING_ID: &str = "data[Demande][id_transaction]";
pub const FIELD_DOCUMENT_NUMBER: &str = "data[Demande][numdocid]";

/// Transport-level failure while querying the tracking page
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Raw reply from the tracking page, whatever its status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: u16,
    pub body: String,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Queries the tracking page for one application
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    async fn fetch(&self, config: &Config) -> Result<StatusResponse, FetchError>;
}

/// Form fields identifying the application
pub fn form_fields(config: &Config) -> [(&'static str, &str); 2] {
    [
        (FIELD_TRACKING_ID, config.tracking_id.as_str()),
        (FIELD_DOCUMENT_NUMBER, config.cin_or_passport_number.as_str()),
    ]
}

/// [`StatusFetcher`] backed by reqwest.
///
/// A client that fails to build is reported by `fetch`, so the failure is
/// recorded like any other transport error.
pub struct HttpStatusFetcher {
    client: Result<reqwest::Client, String>,
}

impl HttpStatusFetcher {
    pub fn new(config: &Config) -> Self {
        if config.accept_invalid_certs {
            warn!(
                endpoint = %config.endpoint,
                "TLS certificate verification is disabled for the tracking page"
            );
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| e.to_string());

        Self { client }
    }
}

#[async_trait]
impl StatusFetcher for HttpStatusFetcher {
    async fn fetch(&self, config: &Config) -> Result<StatusResponse, FetchError> {
        debug!(endpoint = %config.endpoint, "querying tracking page");

        let client = self
            .client
            .as_ref()
            .map_err(|e| FetchError::Client(e.clone()))?;

        let resp = client
            .post(&config.endpoint)
            .form(&form_fields(config))
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;

        debug!(status, bytes = body.len(), "tracking page replied");
        Ok(StatusResponse { status, body })
    }
}
