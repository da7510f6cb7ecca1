//! Error handling for MarketLocale
//!
//! This module defines the error type returned by the fallible edges of the
//! crate: configuration, translation loading and file-backed preferences.
//! Lookups and path encoding never fail and do not use it.

use thiserror::Error;

/// Main error type for MarketLocale
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid translation file for {language}: {reason}")]
    InvalidTranslationFile { language: String, reason: String },

    #[error("Preference storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for MarketLocale operations
pub type Result<T> = std::result::Result<T, LocaleError>;

impl LocaleError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LocaleError::Config(_) => false,
            LocaleError::ConfigLoad(_) => false,
            LocaleError::UnsupportedLanguage(_) => true,
            LocaleError::InvalidTranslationFile { .. } => false,
            LocaleError::Storage(_) => true,
            LocaleError::Serialization(_) => false,
            LocaleError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LocaleError::Config(_) => ErrorSeverity::Critical,
            LocaleError::ConfigLoad(_) => ErrorSeverity::Critical,
            LocaleError::InvalidTranslationFile { .. } => ErrorSeverity::Critical,
            LocaleError::UnsupportedLanguage(_) => ErrorSeverity::Info,
            LocaleError::Storage(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
