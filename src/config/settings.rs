//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Directory holding one `<code>.json` translation file per language
    pub translations_dir: String,
    /// Key under which the visitor's chosen language is persisted
    pub preference_key: String,
}

/// Preference storage configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file backing the preference store; in-memory when unset
    pub preference_file: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Values from the optional `config` file (any format the `config` crate
    /// understands) are overridden by `MARKETLOCALE_*` variables, with `__`
    /// separating sections, e.g. `MARKETLOCALE_I18N__PREFERENCE_KEY`.
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("MARKETLOCALE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LocaleError> {
        super::validation::validate_settings(self)
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            translations_dir: "translations".to_string(),
            preference_key: "language".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: "logs".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.i18n.preference_key, "language");
        assert!(settings.storage.preference_file.is_none());
    }

    #[test]
    fn test_settings_deserialize_from_toml() {
        let source = r#"
            [i18n]
            translations_dir = "assets/locales"
            preference_key = "market.lang"

            [storage]
            preference_file = "prefs.json"

            [logging]
            level = "debug"
            file_path = "/tmp/marketlocale"
            json = true
        "#;

        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.i18n.translations_dir, "assets/locales");
        assert_eq!(settings.i18n.preference_key, "market.lang");
        assert_eq!(settings.storage.preference_file.as_deref(), Some("prefs.json"));
        assert_eq!(settings.logging.level, "debug");
        assert!(settings.logging.json);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let source = r#"
            [i18n]
            preference_key = "lang"
        "#;

        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.i18n.preference_key, "lang");
        assert_eq!(settings.i18n.translations_dir, "translations");
        assert_eq!(settings.logging.level, "info");
        assert!(settings.storage.preference_file.is_none());
    }
}
