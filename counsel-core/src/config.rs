//! Configuration management for Counsel
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (COUNSEL_*)
//! 3. Config file (~/.config/counsel/config.toml)
//! 4. Default values
//!
//! Credentials are not part of this file, see [`crate::secrets`].

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Language model configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Base URL of the chat-completions API
    pub base_url: String,

    /// Model id used by every reviewer and the manager
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mistral.ai/v1".to_string(),
            model: "mistral-medium".to_string(),
            temperature: 0.3,
            timeout: Duration::from_secs(300),
        }
    }
}

/// Messaging notification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Base URL of the Graph API
    pub base_url: String,

    /// Graph API version segment
    pub api_version: String,

    /// Sending phone number id
    pub phone_number_id: Option<String>,

    /// Recipient number in international format without `+`
    pub recipient: Option<String>,

    /// Name of the approved message template
    pub template_name: String,

    /// Template language code
    pub language_code: String,

    /// Request timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            base_url: "https://graph.facebook.com".to_string(),
            api_version: "v22.0".to_string(),
            phone_number_id: None,
            recipient: None,
            template_name: "hello_world".to_string(),
            language_code: "en_US".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl NotifierConfig {
    /// Whether enough is configured to send a notification
    pub fn is_enabled(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        set(&self.phone_number_id) && set(&self.recipient)
    }
}

/// Web server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the web UI to
    pub addr: String,

    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8501".to_string(),
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Language model configuration
    pub model: ModelConfig,

    /// Notification configuration
    pub notifier: NotifierConfig,

    /// Web server configuration
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/counsel/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("counsel").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - COUNSEL_MODEL: Model id
    /// - COUNSEL_MODEL_BASE_URL: Chat-completions base URL
    /// - COUNSEL_WHATSAPP_PHONE_NUMBER_ID: Sending phone number id
    /// - COUNSEL_WHATSAPP_RECIPIENT: Notification recipient
    /// - COUNSEL_WHATSAPP_TEMPLATE: Message template name
    /// - COUNSEL_ADDR: Web server bind address
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(model) = lookup("COUNSEL_MODEL") {
            self.model.model = model;
        }

        if let Some(base_url) = lookup("COUNSEL_MODEL_BASE_URL") {
            self.model.base_url = base_url;
        }

        if let Some(id) = lookup("COUNSEL_WHATSAPP_PHONE_NUMBER_ID") {
            self.notifier.phone_number_id = Some(id);
        }

        if let Some(recipient) = lookup("COUNSEL_WHATSAPP_RECIPIENT") {
            self.notifier.recipient = Some(recipient);
        }

        if let Some(template) = lookup("COUNSEL_WHATSAPP_TEMPLATE") {
            self.notifier.template_name = template;
        }

        if let Some(addr) = lookup("COUNSEL_ADDR") {
            self.server.addr = addr;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, model: Option<String>, addr: Option<String>) -> Self {
        if let Some(m) = model {
            self.model.model = m;
        }

        if let Some(a) = addr {
            self.server.addr = a;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(model: Option<String>, addr: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(model, addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.model, "mistral-medium");
        assert_eq!(config.model.base_url, "https://api.mistral.ai/v1");
        assert_eq!(config.notifier.template_name, "hello_world");
        assert_eq!(config.notifier.language_code, "en_US");
        assert!(!config.notifier.is_enabled());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default()
            .with_cli_overrides(Some("mistral-large".to_string()), Some("0.0.0.0:80".to_string()));

        assert_eq!(config.model.model, "mistral-large");
        assert_eq!(config.server.addr, "0.0.0.0:80");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("COUNSEL_MODEL", "mistral-small"),
            ("COUNSEL_WHATSAPP_PHONE_NUMBER_ID", "1234"),
            ("COUNSEL_WHATSAPP_RECIPIENT", "15550001111"),
        ]
        .into_iter()
        .collect();

        let config =
            Config::default().with_overrides_from(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.model.model, "mistral-small");
        assert_eq!(config.notifier.phone_number_id.as_deref(), Some("1234"));
        assert!(config.notifier.is_enabled());
        // Untouched values keep defaults
        assert_eq!(config.server.addr, "127.0.0.1:8501");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[model]
model = "mistral-large-latest"
timeout = "2m"

[notifier]
phone_number_id = "780135948506513"
recipient = "15550001111"
template_name = "review_done"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.model.model, "mistral-large-latest");
        assert_eq!(config.model.timeout, Duration::from_secs(120));
        assert_eq!(config.notifier.template_name, "review_done");
        assert!(config.notifier.is_enabled());
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[server]
addr = "0.0.0.0:9000"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.addr, "0.0.0.0:9000");
        // model section should use defaults
        assert_eq!(config.model.model, "mistral-medium");
    }

    #[test]
    fn test_blank_recipient_disables_notifier() {
        let notifier = NotifierConfig {
            phone_number_id: Some("1234".to_string()),
            recipient: Some("  ".to_string()),
            ..NotifierConfig::default()
        };
        assert!(!notifier.is_enabled());
    }
}
