//! Webhook notifier

use crate::models::WebhookPayload;
use async_trait::async_trait;
use std::time::Duration;

/// Failure while delivering a webhook message
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Webhook rejected message (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        NotifyError::Network(err.to_string())
    }
}

/// Delivers webhook messages
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, payload: &WebhookPayload) -> Result<(), NotifyError>;
}

/// [`Notifier`] posting JSON to a webhook URL.
///
/// A client that fails to build surfaces as a [`NotifyError`] from `send`.
pub struct WebhookNotifier {
    client: Result<reqwest::Client, String>,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| e.to_string());

        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, payload: &WebhookPayload) -> Result<(), NotifyError> {
        let client = self
            .client
            .as_ref()
            .map_err(|e| NotifyError::Client(e.clone()))?;

        let resp = client.post(&self.url).json(payload).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_webhook_is_network_error() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let notifier = WebhookNotifier::new(format!("http://127.0.0.1:{}/webhook", port), 2);
        let payload = WebhookPayload::new("B3 Tracker");

        let err = notifier.send(&payload).await.unwrap_err();

        assert!(matches!(err, NotifyError::Network(_)));
    }
}
