//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{LocaleError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.translations_dir.trim().is_empty() {
        return Err(LocaleError::Config(
            "Translations directory is required".to_string()
        ));
    }

    if config.preference_key.trim().is_empty() {
        return Err(LocaleError::Config(
            "Preference key is required".to_string()
        ));
    }

    Ok(())
}

/// Validate preference storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if let Some(ref path) = config.preference_file {
        if path.trim().is_empty() {
            return Err(LocaleError::Config(
                "Preference file path cannot be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LocaleError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LocaleError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_path.is_empty() {
        return Err(LocaleError::Config(
            "Log directory is required".to_string()
        ));
    }

    Ok(())
}
