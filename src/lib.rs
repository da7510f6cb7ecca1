//! MarketLocale
//!
//! Locale resolution and translation engine for the marketplace web
//! application. It decides which language is active for a visitor, keeps that
//! choice consistent between the address path, the persisted preference and
//! in-memory state, and resolves dotted translation keys with a fixed
//! fallback policy.

#![allow(non_snake_case)]

pub mod config;
pub mod i18n;
pub mod models;
pub mod routing;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LocaleError, Result};

// Re-export main components for easy access
pub use i18n::{KeyResolver, TranslationIndex, TranslationLoader, TranslationNode};
pub use models::Language;
pub use state::{LocaleContext, LocaleStore, Navigator, PreferenceStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
