//! Logging configuration and setup
//!
//! This module provides logging initialization and the structured events the
//! locale engine emits.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::models::Language;
use crate::utils::errors::{LocaleError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender when dropped; keep it alive
/// for the lifetime of the application.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "marketlocale.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let (json_layer, text_layer) = if config.json {
        (Some(tracing_subscriber::fmt::layer().json().with_writer(non_blocking)), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer().with_writer(non_blocking)))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| LocaleError::Config(format!("Failed to install logger: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a language switch requested by the visitor
pub fn log_language_change(from: Language, to: Language, path: &str) {
    info!(
        from = %from,
        to = %to,
        path = path,
        "Active language changed"
    );
}

/// Log the language adopted when a session starts or the location changes
pub fn log_language_adopted(language: Language, source: &str, path: &str) {
    debug!(
        language = %language,
        source = source,
        path = path,
        "Active language adopted"
    );
}

/// Log a translation key that fell back to a literal
pub fn log_unresolved_key(language: Language, key: &str, fallback: &str) {
    debug!(
        language = %language,
        key = key,
        fallback = fallback,
        "Translation key not resolved"
    );
}

/// Log a replace-navigation issued for a language switch
pub fn log_navigation(path: &str, replace: bool) {
    debug!(path = path, replace = replace, "Navigation requested");
}

/// Log a preference store failure that was swallowed
pub fn log_preference_failure(operation: &str, key: &str, error: &LocaleError) {
    warn!(
        operation = operation,
        key = key,
        error = %error,
        severity = %error.severity(),
        "Preference store operation failed"
    );
}
