//! Webhook message body (Discord-compatible)

use super::event::Event;
use super::state::TrackerState;
use serde::Serialize;

pub const CHANGED_TITLE: &str = "The Tracking status just changed!";
pub const THRESHOLD_CONTENT: &str = "Reached errors threshold!";

/// One embedded block of a webhook message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Webhook message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub username: String,
    pub content: String,
    pub embeds: Vec<Embed>,
}

impl WebhookPayload {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            content: String::new(),
            embeds: Vec::new(),
        }
    }

    /// Build the message announcing `event` from the current state
    pub fn for_event(username: &str, event: Event, state: &TrackerState) -> Self {
        let mut payload = Self::new(username);
        let color = event.color();

        match event {
            Event::Changed => {
                payload.embeds.push(Embed {
                    title: CHANGED_TITLE.to_string(),
                    description: state.content.clone(),
                    color,
                    timestamp: None,
                });
            }
            Event::Error => {
                payload.content = THRESHOLD_CONTENT.to_string();
                payload.embeds = state
                    .errors
                    .iter()
                    .map(|(timestamp, message)| Embed {
                        title: String::new(),
                        description: message.clone(),
                        color,
                        timestamp: Some(timestamp.clone()),
                    })
                    .collect();
            }
        }

        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_payload() {
        let state = TrackerState {
            content: "Votre demande est en cours".to_string(),
            errors: vec![],
        };

        let payload = WebhookPayload::for_event("B3 Tracker", Event::Changed, &state);

        assert_eq!(payload.username, "B3 Tracker");
        assert!(payload.content.is_empty());
        assert_eq!(payload.embeds.len(), 1);
        assert_eq!(payload.embeds[0].title, CHANGED_TITLE);
        assert_eq!(payload.embeds[0].description, "Votre demande est en cours");
        assert_eq!(payload.embeds[0].color, Event::Changed.color());
        assert_eq!(payload.embeds[0].timestamp, None);
    }

    #[test]
    fn test_changed_payload_omits_timestamp() {
        let state = TrackerState {
            content: "B".to_string(),
            errors: vec![],
        };
        let json = serde_json::to_value(WebhookPayload::for_event("u", Event::Changed, &state))
            .unwrap();

        assert!(json["embeds"][0].get("timestamp").is_none());
    }

    #[test]
    fn test_error_payload_has_one_embed_per_error() {
        let mut state = TrackerState::new();
        state.record_error("2024-05-01T10:00:00+00:00", "first");
        state.record_error("2024-05-01T11:00:00+00:00", "second");
        state.record_error("2024-05-01T12:00:00+00:00", "third");

        let payload = WebhookPayload::for_event("B3 Tracker", Event::Error, &state);

        assert_eq!(payload.content, THRESHOLD_CONTENT);
        assert_eq!(payload.embeds.len(), 3);
        for (embed, (ts, msg)) in payload.embeds.iter().zip(&state.errors) {
            assert!(embed.title.is_empty());
            assert_eq!(&embed.description, msg);
            assert_eq!(embed.timestamp.as_ref(), Some(ts));
            assert_eq!(embed.color, Event::Error.color());
        }
    }

    #[test]
    fn test_event_colors_differ() {
        assert_ne!(Event::Changed.color(), Event::Error.color());
    }
}
