//! Secrets management for Counsel
//!
//! Secrets are stored separately from configuration to avoid accidental sharing.
//! The secrets file is located at `~/.config/counsel/secrets.toml` and must have
//! restrictive permissions (0600 on Unix).
//!
//! Loading priority:
//! 1. Environment variables (MISTRAL_API_KEY, WHATSAPP_ACCESS_TOKEN)
//! 2. Secrets file (~/.config/counsel/secrets.toml)
//!
//! Both secrets are required. [`Secrets::require`] resolves them once at
//! startup into [`Credentials`], which are then handed to each collaborator.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, Result};

/// Environment variable holding the language model API key
pub const MODEL_API_KEY_VAR: &str = "MISTRAL_API_KEY";

/// Environment variable holding the messaging API token
pub const WHATSAPP_TOKEN_VAR: &str = "WHATSAPP_ACCESS_TOKEN";

const SECRETS_HINT: &str =
    "Set it in the environment, a .env file, or ~/.config/counsel/secrets.toml";

/// Secrets structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Secrets {
    /// Language model provider secrets
    pub model: ModelSecrets,
    /// WhatsApp Cloud API secrets
    pub whatsapp: WhatsAppSecrets,
}

/// Language model provider secrets
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelSecrets {
    /// API key for the chat-completions provider
    pub api_key: Option<String>,
}

/// WhatsApp-related secrets
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WhatsAppSecrets {
    /// Graph API access token
    pub access_token: Option<String>,
}

/// Resolved credentials, passed explicitly to each collaborator
#[derive(Clone)]
pub struct Credentials {
    /// Language model API key
    pub model_api_key: String,
    /// Messaging API token
    pub whatsapp_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("model_api_key", &"<redacted>")
            .field("whatsapp_token", &"<redacted>")
            .finish()
    }
}

impl Secrets {
    /// Load secrets from the default location
    ///
    /// Returns default (empty) secrets if file doesn't exist
    pub fn load() -> Result<Self> {
        let secrets_path = Self::default_secrets_path();

        if let Some(path) = secrets_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load secrets from a specific file with permission checking
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let metadata = std::fs::metadata(path).map_err(Error::Io)?;
            let mode = metadata.permissions().mode();

            // Readable by group or others
            if mode & 0o077 != 0 {
                return Err(Error::Config(format!(
                    "Secrets file {} has insecure permissions {:o}. \
                     Please run: chmod 600 {}",
                    path.display(),
                    mode & 0o777,
                    path.display()
                )));
            }

            debug!(path = %path.display(), mode = format!("{:o}", mode & 0o777), "Secrets file permissions OK");
        }

        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let mut secrets: Secrets = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse secrets: {}", e)))?;

        for value in [
            &mut secrets.model.api_key,
            &mut secrets.whatsapp.access_token,
        ] {
            if let Some(v) = value {
                *v = v.trim().to_string();
            }
        }

        Ok(secrets)
    }

    /// Get the default secrets file path
    ///
    /// Returns `~/.config/counsel/secrets.toml` on Unix
    pub fn default_secrets_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("counsel").join("secrets.toml"))
    }

    /// Get the model API key with environment variable override
    pub fn model_api_key(&self) -> Option<String> {
        pick(MODEL_API_KEY_VAR, std::env::var(MODEL_API_KEY_VAR).ok(), &self.model.api_key)
    }

    /// Get the WhatsApp token with environment variable override
    pub fn whatsapp_token(&self) -> Option<String> {
        pick(
            WHATSAPP_TOKEN_VAR,
            std::env::var(WHATSAPP_TOKEN_VAR).ok(),
            &self.whatsapp.access_token,
        )
    }

    /// Resolve both required secrets
    ///
    /// Fails with [`Error::MissingSecret`] naming the first secret that is unset.
    pub fn require(&self) -> Result<Credentials> {
        self.require_from(|key| std::env::var(key).ok())
    }

    fn require_from(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<Credentials> {
        let model_api_key = pick(MODEL_API_KEY_VAR, lookup(MODEL_API_KEY_VAR), &self.model.api_key)
            .ok_or(Error::MissingSecret {
                name: MODEL_API_KEY_VAR,
                hint: SECRETS_HINT,
            })?;

        let whatsapp_token = pick(
            WHATSAPP_TOKEN_VAR,
            lookup(WHATSAPP_TOKEN_VAR),
            &self.whatsapp.access_token,
        )
        .ok_or(Error::MissingSecret {
            name: WHATSAPP_TOKEN_VAR,
            hint: SECRETS_HINT,
        })?;

        Ok(Credentials {
            model_api_key,
            whatsapp_token,
        })
    }

    /// Create a template secrets file at the default location
    ///
    /// Creates parent directories if needed and sets secure permissions
    pub fn create_template() -> Result<PathBuf> {
        let path = Self::default_secrets_path()
            .ok_or_else(|| Error::Config("Could not determine secrets path".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::Io)?;
        }

        // Don't overwrite existing file
        if path.exists() {
            return Err(Error::Config(format!(
                "Secrets file already exists at {}",
                path.display()
            )));
        }

        let template = r#"# Counsel Secrets
# This file contains sensitive credentials - do not share or commit to version control
#
# IMPORTANT: This file must have restrictive permissions (chmod 600)

[model]
# Mistral API key (overridden by MISTRAL_API_KEY)
api_key = ""

[whatsapp]
# WhatsApp Cloud API access token (overridden by WHATSAPP_ACCESS_TOKEN)
access_token = ""
"#;

        std::fs::write(&path, template).map_err(Error::Io)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, perms).map_err(Error::Io)?;
        }

        warn!(path = %path.display(), "Created secrets template - please edit and add your keys");

        Ok(path)
    }
}

/// Environment value first, then the file value; blank values count as unset
fn pick(name: &str, env_value: Option<String>, file_value: &Option<String>) -> Option<String> {
    if let Some(value) = env_value {
        let value = value.trim().to_string();
        if !value.is_empty() {
            debug!(name, "Using secret from environment");
            return Some(value);
        }
    }

    if let Some(ref value) = file_value {
        if !value.is_empty() {
            debug!(name, "Using secret from secrets file");
            return Some(value.clone());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_secrets() {
        let secrets = Secrets::default();
        assert!(secrets.model.api_key.is_none());
        assert!(secrets.whatsapp.access_token.is_none());
    }

    #[test]
    fn test_parse_secrets() {
        let toml = r#"
[model]
api_key = "mk-123"

[whatsapp]
access_token = "EAAG"
"#;
        let secrets: Secrets = toml::from_str(toml).unwrap();
        assert_eq!(secrets.model.api_key, Some("mk-123".to_string()));
        assert_eq!(secrets.whatsapp.access_token, Some("EAAG".to_string()));
    }

    #[test]
    fn test_require_from_environment() {
        let secrets = Secrets::default();
        let creds = secrets
            .require_from(|key| match key {
                MODEL_API_KEY_VAR => Some(" mk-env ".to_string()),
                WHATSAPP_TOKEN_VAR => Some("wa-env".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(creds.model_api_key, "mk-env");
        assert_eq!(creds.whatsapp_token, "wa-env");
    }

    #[test]
    fn test_require_env_overrides_file() {
        let secrets = Secrets {
            model: ModelSecrets {
                api_key: Some("from_file".to_string()),
            },
            whatsapp: WhatsAppSecrets {
                access_token: Some("wa_file".to_string()),
            },
        };

        let creds = secrets
            .require_from(|key| (key == MODEL_API_KEY_VAR).then(|| "from_env".to_string()))
            .unwrap();

        assert_eq!(creds.model_api_key, "from_env");
        assert_eq!(creds.whatsapp_token, "wa_file");
    }

    #[test]
    fn test_require_missing_model_key() {
        let secrets = Secrets::default();
        let err = secrets
            .require_from(|key| (key == WHATSAPP_TOKEN_VAR).then(|| "wa".to_string()))
            .unwrap_err();

        assert!(matches!(
            err,
            Error::MissingSecret {
                name: MODEL_API_KEY_VAR,
                ..
            }
        ));
        assert!(err.to_string().contains("MISTRAL_API_KEY"));
    }

    #[test]
    fn test_require_blank_token_is_missing() {
        let secrets = Secrets::default();
        let err = secrets
            .require_from(|key| match key {
                MODEL_API_KEY_VAR => Some("mk".to_string()),
                _ => Some("   ".to_string()),
            })
            .unwrap_err();

        assert!(err.to_string().contains("WHATSAPP_ACCESS_TOKEN"));
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials {
            model_api_key: "mk-secret".to_string(),
            whatsapp_token: "wa-secret".to_string(),
        };
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("mk-secret"));
        assert!(!debug.contains("wa-secret"));
    }

    #[cfg(unix)]
    #[test]
    fn test_insecure_permissions_rejected() {
        use std::os::unix::fs::PermissionsExt;

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[model]\napi_key = \"test\"").unwrap();

        let perms = std::fs::Permissions::from_mode(0o644);
        std::fs::set_permissions(file.path(), perms).unwrap();

        let result = Secrets::load_from_file(&file.path().to_path_buf());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("insecure permissions"));
    }

    #[cfg(unix)]
    #[test]
    fn test_secure_permissions_accepted_and_trimmed() {
        use std::os::unix::fs::PermissionsExt;

        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[model]\napi_key = \"  mk-file  \"\n[whatsapp]\naccess_token = \"wa\""
        )
        .unwrap();

        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(file.path(), perms).unwrap();

        let secrets = Secrets::load_from_file(&file.path().to_path_buf()).unwrap();
        assert_eq!(secrets.model.api_key, Some("mk-file".to_string()));
        assert_eq!(secrets.whatsapp.access_token, Some("wa".to_string()));
    }
}
