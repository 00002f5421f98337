//! Tracker configuration (`config.json`)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tracking page queried when the config does not override it
pub const DEFAULT_ENDPOINT: &str = "https://b3.interieur.gov.tn/suivi";

/// Name shown as the webhook message author
pub const DEFAULT_USERNAME: &str = "B3 Tracker";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Result type for config loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Config field '{0}' must not be empty")]
    MissingField(&'static str),
}

/// Static settings for one tracked application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Transaction id printed on the B3 receipt
    pub tracking_id: String,

    /// National id card or passport number used when applying
    pub cin_or_passport_number: String,

    /// Webhook receiving the notifications
    pub webhook_url: String,

    /// Tracking page URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout for both outbound calls
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Skip TLS certificate verification on the tracking page.
    ///
    /// Insecure. Only for hosts serving a broken certificate chain.
    #[serde(default)]
    pub accept_invalid_certs: bool,

    /// Webhook author name
    #[serde(default = "default_username")]
    pub username: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

impl Config {
    /// Build a config with defaults for every optional field
    pub fn new(
        tracking_id: impl Into<String>,
        cin_or_passport_number: impl Into<String>,
        webhook_url: impl Into<String>,
    ) -> Self {
        Self {
            tracking_id: tracking_id.into(),
            cin_or_passport_number: cin_or_passport_number.into(),
            webhook_url: webhook_url.into(),
            endpoint: default_endpoint(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: false,
            username: default_username(),
        }
    }

    /// Load and validate the config file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject blank required fields
    pub fn validate(&self) -> ConfigResult<()> {
        let required = [
            ("tracking_id", &self.tracking_id),
            ("cin_or_passport_number", &self.cin_or_passport_number),
            ("webhook_url", &self.webhook_url),
            ("endpoint", &self.endpoint),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField(name));
            }
        }

        Ok(())
    }

    /// Default config path, relative to the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_minimal_config_applies_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
                "tracking_id": "123456",
                "cin_or_passport_number": "09876543",
                "webhook_url": "https://discord.com/api/webhooks/1/abc"
            }"#,
        );

        let config = Config::load(&path).unwrap();

        assert_eq!(config.tracking_id, "123456");
        assert_eq!(config.cin_or_passport_number, "09876543");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.username, DEFAULT_USERNAME);
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_missing_field() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"tracking_id": "1", "webhook_url": "http://x"}"#);

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_blank_field() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"tracking_id": "  ", "cin_or_passport_number": "1", "webhook_url": "http://x"}"#,
        );

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("tracking_id")));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ not json");

        assert!(matches!(
            Config::load(&path).unwrap_err(),
            ConfigError::ParseError(_)
        ));
    }
}
