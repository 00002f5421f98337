// B3 Tracker - polls the B3 tracking page and reports status changes to a webhook

pub mod cli;
pub mod client;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod state;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use client::{Notifier, StatusFetcher, StatusResponse};
pub use models::{Config, Event, TrackerState, WebhookPayload};
pub use orchestrator::{RunOutcome, StatusOutcome, Tracker, TrackerError};
pub use state::StateStore;
