//! Single poll pass: fetch, compare, notify, persist

use crate::client::{FetchError, Notifier, StatusFetcher};
use crate::models::{Config, Event, TrackerState, WebhookPayload};
use crate::parser::parse_status;
use crate::state::{StateError, StateStore};
use chrono::{SecondsFormat, Utc};
use tracing::{error, info, warn};

/// Produces the timestamp recorded next to each error
pub type Clock = Box<dyn Fn() -> String + Send + Sync>;

/// Errors that end a run with a failure exit
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Failed to fetch tracking status: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    State(#[from] StateError),
}

/// What the status check produced this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    /// New status text; a change notification was attempted
    Changed(String),
    /// Same text as last run
    Unchanged,
    /// Bad response or unparseable page; an error was recorded
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub status: StatusOutcome,
    /// The error threshold was reached and an error notification was attempted
    pub threshold_notified: bool,
}

/// Runs one poll pass against a state file
pub struct Tracker {
    store: StateStore,
    fetcher: Box<dyn StatusFetcher>,
    notifier: Box<dyn Notifier>,
    clock: Clock,
}

fn utc_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl Tracker {
    pub fn new(
        store: StateStore,
        fetcher: Box<dyn StatusFetcher>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            fetcher,
            notifier,
            clock: Box::new(utc_now),
        }
    }

    /// Replace the timestamp source
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Check the tracking page once and update `state`.
    ///
    /// A transport failure is recorded and persisted before it is returned.
    /// Every other failure is recorded in `state.errors` and the run goes on.
    /// `state` is saved before returning `Ok`.
    pub async fn run(
        &self,
        state: &mut TrackerState,
        config: &Config,
    ) -> Result<RunOutcome, TrackerError> {
        let response = match self.fetcher.fetch(config).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "tracking page request failed");
                state.record_error((self.clock)(), e.to_string());
                self.store.save(state)?;
                return Err(e.into());
            }
        };

        let status = if response.is_success() {
            match parse_status(&response.body) {
                Ok(content) => {
                    info!(status = %content, "parsed tracking status");
                    if state.update_content(&content) {
                        info!("status changed, sending notification");
                        self.notify(config, state, Event::Changed).await;
                        StatusOutcome::Changed(content)
                    } else {
                        StatusOutcome::Unchanged
                    }
                }
                Err(e) => {
                    warn!(error = %e, "could not parse tracking page");
                    let message = e.to_string();
                    state.record_error((self.clock)(), message.clone());
                    StatusOutcome::Failed(message)
                }
            }
        } else {
            warn!(status = response.status, "tracking page returned an error status");
            let message = format!("code: {}, content: {}", response.status, response.body);
            state.record_error((self.clock)(), message.clone());
            StatusOutcome::Failed(message)
        };

        let threshold_notified = state.threshold_reached();
        if threshold_notified {
            warn!(
                errors = state.errors.len(),
                "error threshold reached, please check logs"
            );
            self.notify(config, state, Event::Error).await;
            state.clear_errors();
        }

        self.store.save(state)?;

        Ok(RunOutcome {
            status,
            threshold_notified,
        })
    }

    /// Send a notification; failures are logged and never propagate
    async fn notify(&self, config: &Config, state: &TrackerState, event: Event) {
        let payload = WebhookPayload::for_event(&config.username, event, state);

        match self.notifier.send(&payload).await {
            Ok(()) => info!(%event, "notification sent"),
            Err(e) => error!(%event, error = %e, "unable to send notification"),
        }
    }
}
