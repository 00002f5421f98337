use crate::client::{HttpStatusFetcher, WebhookNotifier};
use crate::models::Config;
use crate::orchestrator::{RunOutcome, StatusOutcome, Tracker};
use crate::state::StateStore;
use crate::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Run one poll pass with the HTTP clients
pub async fn run(config_path: &Path, state_path: &Path) -> Result<()> {
    let store = StateStore::new(state_path);
    let mut state = store
        .load_or_init()
        .with_context(|| format!("Failed to load state from {}", state_path.display()))?;

    let config = Config::load(config_path)
        .with_context(|| format!("Invalid config {}", config_path.display()))?;

    let fetcher = HttpStatusFetcher::new(&config);
    let notifier = WebhookNotifier::new(&config.webhook_url, config.timeout_secs);
    let tracker = Tracker::new(store, Box::new(fetcher), Box::new(notifier));

    let outcome = tracker.run(&mut state, &config).await?;
    print_outcome(&outcome);

    Ok(())
}

fn print_outcome(outcome: &RunOutcome) {
    match &outcome.status {
        StatusOutcome::Changed(content) => {
            println!("{}", "🔔 Tracking status changed:".green().bold());
            println!("   {}", content);
        }
        StatusOutcome::Unchanged => {
            println!("{}", "✅ Tracking status unchanged".green());
        }
        StatusOutcome::Failed(message) => {
            println!("{}", format!("⚠ Check failed: {}", message).yellow());
        }
    }

    if outcome.threshold_notified {
        println!(
            "{}",
            "⚠ Error threshold reached, error report sent. Please check logs.".yellow()
        );
    }
}
