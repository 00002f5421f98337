//! StateStore - `.state` file load/save

use crate::models::TrackerState;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Result type for state store operations
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur when reading or writing the state file
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("State file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to access state file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse state file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to persist state file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Persists [`TrackerState`] to a single JSON file
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default state path, relative to the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(".state")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted state.
    ///
    /// A missing file is reported as [`StateError::NotFound`] so callers can
    /// tell it apart from a corrupt one.
    pub fn load(&self) -> StateResult<TrackerState> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StateError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }

    /// Load the state, creating and persisting an empty one on first run
    pub fn load_or_init(&self) -> StateResult<TrackerState> {
        match self.load() {
            Ok(state) => {
                debug!(path = %self.path.display(), ?state, "loaded saved state");
                Ok(state)
            }
            Err(StateError::NotFound(_)) => {
                let state = TrackerState::new();
                self.save(&state)?;
                info!(path = %self.path.display(), "created new state");
                Ok(state)
            }
            Err(e) => Err(e),
        }
    }

    /// Overwrite the state file.
    ///
    /// Writes a temp file in the same directory and renames it over the target.
    pub fn save(&self, state: &TrackerState) -> StateResult<()> {
        let content = serde_json::to_string_pretty(state)?;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&self.path)?;

        Ok(())
    }
}
