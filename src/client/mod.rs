//! Outbound HTTP: the tracking page and the notification webhook

pub mod status;
pub mod webhook;

pub use status::{FetchError, HttpStatusFetcher, StatusFetcher, StatusResponse};
pub use webhook::{Notifier, NotifyError, WebhookNotifier};
