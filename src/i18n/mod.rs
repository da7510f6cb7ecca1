//! Internationalization module
//!
//! Translation trees per language, key resolution with fallback, and loading
//! of translation files from disk.

pub mod index;
pub mod loader;
pub mod node;
pub mod resolver;

// Re-export commonly used i18n components
pub use index::{LanguageStats, TranslationIndex, TranslationStats};
pub use loader::TranslationLoader;
pub use node::TranslationNode;
pub use resolver::{format_message, KeyResolver, TranslationParams};
