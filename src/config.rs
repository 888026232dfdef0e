use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub contact: ContactSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Location of the single-slot preference file
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> String {
    ".folio/prefs.toml".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSettings {
    /// Recipient used when the form markup carries no usable mailto target
    #[serde(default = "default_fallback_recipient")]
    pub fallback_recipient: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            fallback_recipient: default_fallback_recipient(),
        }
    }
}

fn default_fallback_recipient() -> String {
    "hello@folio.dev".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeSettings {
    /// System color-scheme signal as the host observed it; `None` when the
    /// platform cannot answer
    #[serde(default)]
    pub system_dark: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with FOLIO_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with FOLIO)
            // e.g., FOLIO__STORAGE__PATH -> storage.path
            .add_source(
                Environment::with_prefix("FOLIO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FOLIO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
