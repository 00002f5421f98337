//! State file management
//!
//! Keeps the last seen status text and the unresolved errors between runs.

mod manager;

pub use manager::{StateError, StateResult, StateStore};
