pub mod config;
pub mod event;
pub mod payload;
pub mod state;

pub use config::{Config, ConfigError};
pub use event::Event;
pub use payload::{Embed, WebhookPayload};
pub use state::{ErrorEntry, TrackerState, ERROR_THRESHOLD};
