use crate::models::{TrackerState, ERROR_THRESHOLD};
use crate::state::{StateError, StateStore};
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Print the persisted state without touching the network
pub fn run(state_path: &Path, json: bool) -> Result<()> {
    let store = StateStore::new(state_path);

    let state = match store.load() {
        Ok(state) => state,
        Err(StateError::NotFound(path)) => {
            if json {
                println!("{{\"error\": \"state_not_found\"}}");
            } else {
                println!(
                    "{}",
                    format!("No state at {} yet. Run 'b3-tracker check' first.", path.display())
                        .yellow()
                );
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_state(&state);
    }

    Ok(())
}

fn print_state(state: &TrackerState) {
    println!("{}", "B3 tracking state".cyan().bold());
    println!();

    if state.content.is_empty() {
        println!("   Status: {}", "(none seen yet)".bright_black());
    } else {
        println!("   Status: {}", state.content.green());
    }

    println!(
        "   Errors: {}/{}",
        state.errors.len(),
        ERROR_THRESHOLD
    );
    for (timestamp, message) in &state.errors {
        println!("     {} {}", timestamp.bright_black(), message.red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_show_missing_state_is_ok() {
        let temp = TempDir::new().unwrap();
        assert!(run(&temp.path().join(".state"), false).is_ok());
        assert!(!temp.path().join(".state").exists());
    }

    #[test]
    fn test_show_existing_state() {
        let temp = TempDir::new().unwrap();
        let store = StateStore::new(temp.path().join(".state"));
        let mut state = TrackerState::new();
        state.content = "En cours".to_string();
        state.record_error("2024-01-01T00:00:00Z", "code: 502, content: bad gateway");
        store.save(&state).unwrap();

        assert!(run(store.path(), false).is_ok());
        assert!(run(store.path(), true).is_ok());
    }
}
