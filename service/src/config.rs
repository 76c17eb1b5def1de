use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::compose::{default_templates, Template, DEFAULT_GMAIL_BASE_URL};
use crate::favorites::DEFAULT_SLOT;

/// Value shipped in the example config file; treated as unset.
pub const CIVIC_API_KEY_PLACEHOLDER: &str = "YOUR_GOOGLE_CIVIC_API_KEY_HERE";

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "repfinder.yaml";

/// Application configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. repfinder.yaml file (if exists)
/// 3. Environment variables with RF_ prefix (always wins)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub civic: CivicConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
    pub logging: LoggingConfig,
    /// Message templates by id. Entries here are merged over the built-in set.
    #[serde(default = "default_templates")]
    pub templates: BTreeMap<String, Template>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CivicConfig {
    /// Civic Information API key (required, no compiled-in default).
    #[serde(default)]
    pub api_key: String,

    /// API root; override to point at a proxy or test server.
    #[serde(default = "default_civic_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Send through Gmail instead of handing off to the mail client.
    #[serde(default)]
    pub enabled: bool,

    /// OAuth access token with the `gmail.send` scope. Without one, sending
    /// is enabled but unauthorized.
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default = "default_gmail_base_url")]
    pub base_url: String,
}

impl EmailConfig {
    /// Whether an access token is available.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FavoritesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory holding the favorites slot. Defaults to `.repfinder` in the
    /// working directory.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,

    /// Name of the slot the favorites list is written to.
    #[serde(default = "default_slot")]
    pub slot: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log filter directive (e.g. "info", "repfinder=debug,rf_civic=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_civic_base_url() -> String {
    rf_civic::DEFAULT_BASE_URL.to_string()
}

fn default_gmail_base_url() -> String {
    DEFAULT_GMAIL_BASE_URL.to_string()
}

// These functions cannot be const because serde uses function pointers for defaults
#[allow(clippy::missing_const_for_fn)]
fn default_true() -> bool {
    true
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".repfinder")
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            access_token: None,
            base_url: default_gmail_base_url(),
        }
    }
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            storage_dir: default_storage_dir(),
            slot: default_slot(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            civic: CivicConfig {
                api_key: String::new(),
                base_url: default_civic_base_url(),
            },
            email: EmailConfig::default(),
            favorites: FavoritesConfig::default(),
            logging: LoggingConfig {
                level: default_log_level(),
            },
            templates: default_templates(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Configuration required: {}", .0.join("; "))]
    Missing(Vec<String>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. repfinder.yaml file (if exists)
    /// 3. Environment variables with RF_ prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("RF_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Settings that must be supplied before the tool can run.
    #[must_use]
    pub fn missing(&self) -> Vec<String> {
        let mut missing = Vec::new();

        let key = self.civic.api_key.trim();
        if key.is_empty() || key == CIVIC_API_KEY_PLACEHOLDER {
            missing.push(
                "Civic Information API key (set RF_CIVIC__API_KEY or civic.api_key in repfinder.yaml)"
                    .to_string(),
            );
        }

        missing
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any required setting is missing or any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        for (field, url) in [
            ("civic.base_url", &self.civic.base_url),
            ("email.base_url", &self.email.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "{field} must start with http:// or https://, got: '{url}'"
                )));
            }
        }

        if self.favorites.enabled && self.favorites.slot.trim().is_empty() {
            return Err(ConfigError::Validation(
                "favorites.slot cannot be empty".into(),
            ));
        }

        for (id, template) in &self.templates {
            if template.subject.trim().is_empty() || template.body.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "templates.{id} needs both a subject and a body"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.civic.api_key = "test-key".into();
        config
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.civic.base_url, "https://www.googleapis.com/civicinfo/v2");
        assert!(config.civic.api_key.is_empty());
        assert!(!config.email.enabled);
        assert!(config.email.access_token.is_none());
        assert_eq!(config.email.base_url, "https://gmail.googleapis.com");
        assert!(config.favorites.enabled);
        assert_eq!(config.favorites.slot, "rep-favorites");
        assert_eq!(config.favorites.storage_dir, PathBuf::from(".repfinder"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.templates.len(), 5);
    }

    #[test]
    fn test_validation_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_missing_api_key() {
        let config = Config::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ref items) if items.len() == 1));
        assert!(err.to_string().contains("Civic Information API key"));
    }

    #[test]
    fn test_validation_rejects_placeholder_api_key() {
        let mut config = valid_config();
        config.civic.api_key = CIVIC_API_KEY_PLACEHOLDER.into();
        assert!(matches!(config.validate(), Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_email_enabled_without_token_is_valid_but_unauthorized() {
        let mut config = valid_config();
        config.email.enabled = true;
        assert!(config.validate().is_ok());
        assert!(!config.email.is_authorized());

        config.email.access_token = Some("   ".into());
        assert!(!config.email.is_authorized());

        config.email.access_token = Some("ya29.token".into());
        assert!(config.email.is_authorized());
    }

    #[test]
    fn test_validation_rejects_empty_slot() {
        let mut config = valid_config();
        config.favorites.slot = " ".into();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("favorites.slot"));

        // Irrelevant when favorites are off.
        config.favorites.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_blank_template() {
        let mut config = valid_config();
        config
            .templates
            .insert("empty".into(), Template::new("Subject", ""));
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("templates.empty"));
    }

    #[test]
    fn base_url_boundaries() {
        let cases = [
            ("https://www.googleapis.com/civicinfo/v2", true, "default"),
            ("http://127.0.0.1:8080", true, "local http"),
            ("ftp://example.com", false, "ftp scheme"),
            ("www.googleapis.com", false, "no scheme"),
            ("", false, "empty"),
        ];

        for (url, should_pass, desc) in cases {
            let mut config = valid_config();
            config.civic.base_url = url.into();
            let result = config.validate();
            assert_eq!(result.is_ok(), should_pass, "case '{}': {:?}", desc, result);
        }
    }

    #[test]
    fn test_load_merges_yaml_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "repfinder.yaml",
                r#"
civic:
  api_key: yaml-key
favorites:
  storage_dir: /tmp/favs
templates:
  custom:
    subject: Hello
    body: Dear [Representative Name]
  general:
    subject: Overridden
    body: Dear [Representative Name], overridden.
"#,
            )?;
            jail.set_env("RF_CIVIC__API_KEY", "env-key");
            jail.set_env("RF_EMAIL__ENABLED", "true");

            let config = Config::load().map_err(|e| e.to_string())?;

            assert_eq!(config.civic.api_key, "env-key");
            assert!(config.email.enabled);
            assert_eq!(config.favorites.storage_dir, PathBuf::from("/tmp/favs"));
            assert_eq!(config.templates.len(), 6);
            assert_eq!(config.templates["general"].subject, "Overridden");
            assert_eq!(config.templates["custom"].subject, "Hello");
            Ok(())
        });
    }

    #[test]
    fn test_load_fails_without_api_key() {
        Jail::expect_with(|_jail| {
            let result = Config::load();
            assert!(matches!(result, Err(ConfigError::Missing(_))));
            Ok(())
        });
    }

    #[test]
    fn test_load_from_custom_path() {
        Jail::expect_with(|jail| {
            jail.create_file("alt.yaml", "civic:\n  api_key: alt-key\nlogging:\n  level: debug\n")?;

            let config = Config::load_from("alt.yaml").map_err(|e| e.to_string())?;
            assert_eq!(config.civic.api_key, "alt-key");
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }
}
