//! Mail configuration
//!
//! Persisted to `<data dir>/Track Info/mail_config.json`. The SendGrid API
//! key must be supplied there; the addresses, subject, and body have working
//! defaults. A missing key is a user-visible configuration error that blocks
//! submission, never a crash.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_FROM: &str = "sendtowcpm@gmail.com";
const DEFAULT_TO: &str = "nicolas.techer@warnerchappellpm.com";
const DEFAULT_SUBJECT: &str = "WCPM Track Information";
const DEFAULT_BODY: &str = "Please find the attached Excel file with track information.";

/// Configuration for the outgoing submission email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SendGrid API key; empty means not configured
    #[serde(default)]
    pub api_key: String,
    /// Sender address (must be verified with SendGrid)
    #[serde(default = "default_from")]
    pub from_address: String,
    /// Recipient address
    #[serde(default = "default_to")]
    pub to_address: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    /// Plain-text body of the email
    #[serde(default = "default_body")]
    pub body: String,
}

fn default_from() -> String {
    DEFAULT_FROM.to_string()
}

fn default_to() -> String {
    DEFAULT_TO.to_string()
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

fn default_body() -> String {
    DEFAULT_BODY.to_string()
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            from_address: default_from(),
            to_address: default_to(),
            subject: default_subject(),
            body: default_body(),
        }
    }
}

impl MailConfig {
    const CONFIG_FILE: &'static str = "mail_config.json";

    /// Get the app data directory (~/Library/Application Support/Track Info/)
    fn get_app_data_dir() -> Result<PathBuf, String> {
        let data_dir =
            dirs::data_dir().ok_or_else(|| "Could not determine data directory".to_string())?;

        let app_dir = data_dir.join("Track Info");

        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)
                .map_err(|e| format!("Failed to create app data directory: {}", e))?;
        }

        Ok(app_dir)
    }

    /// Load the mail config from disk, or return defaults if not found
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => {
                log::debug!("Loaded mail config from disk");
                config
            }
            Err(e) => {
                log::debug!("Using default mail config: {}", e);
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self, String> {
        let app_dir = Self::get_app_data_dir()?;
        let config_path = app_dir.join(Self::CONFIG_FILE);

        if !config_path.exists() {
            return Err("Config file not found".to_string());
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read config: {}", e))?;

        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Save the mail config to disk
    pub fn save(&self) -> Result<(), String> {
        let app_dir = Self::get_app_data_dir()?;
        let config_path = app_dir.join(Self::CONFIG_FILE);

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&config_path, json)
            .map_err(|e| format!("Failed to write config: {}", e))?;

        log::debug!("Saved mail config to {:?}", config_path);
        Ok(())
    }

    /// True when an API key is present
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
