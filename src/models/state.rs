use serde::{Deserialize, Serialize};

/// Number of unresolved errors that triggers an error notification
pub const ERROR_THRESHOLD: usize = 3;

/// A recorded failure: (timestamp, message)
pub type ErrorEntry = (String, String);

/// Persisted tracker state, carried between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    /// Last status text seen on the tracking page
    #[serde(default)]
    pub content: String,

    /// Errors recorded since the last change or threshold notification
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error with its timestamp
    pub fn record_error(&mut self, timestamp: impl Into<String>, message: impl Into<String>) {
        self.errors.push((timestamp.into(), message.into()));
    }

    /// Replace the content if it differs. Returns true when it changed.
    ///
    /// A change also resolves every pending error.
    pub fn update_content(&mut self, content: &str) -> bool {
        if self.content == content {
            return false;
        }
        self.content = content.to_string();
        self.errors.clear();
        true
    }

    pub fn threshold_reached(&self) -> bool {
        self.errors.len() >= ERROR_THRESHOLD
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_content_clears_errors() {
        let mut state = TrackerState {
            content: "A".to_string(),
            errors: vec![("t0".to_string(), "boom".to_string())],
        };

        assert!(state.update_content("B"));
        assert_eq!(state.content, "B");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_update_content_unchanged() {
        let mut state = TrackerState {
            content: "A".to_string(),
            errors: vec![("t0".to_string(), "boom".to_string())],
        };

        assert!(!state.update_content("A"));
        assert_eq!(state.errors.len(), 1);
    }

    #[test]
    fn test_threshold() {
        let mut state = TrackerState::new();
        state.record_error("t0", "e0");
        state.record_error("t1", "e1");
        assert!(!state.threshold_reached());

        state.record_error("t2", "e2");
        assert!(state.threshold_reached());
    }

    #[test]
    fn test_serialized_shape() {
        let mut state = TrackerState::new();
        state.content = "Done".to_string();
        state.record_error("2024-01-01T00:00:00+00:00", "oops");

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "content": "Done",
                "errors": [["2024-01-01T00:00:00+00:00", "oops"]]
            })
        );
    }
}
