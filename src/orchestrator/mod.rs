pub mod tracker;

pub use tracker::{Clock, RunOutcome, StatusOutcome, Tracker, TrackerError};
