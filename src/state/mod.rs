//! State management module
//!
//! This module holds the session's active language, the abstractions over the
//! host's preference storage and router, and the context handed to screens.

pub mod context;
pub mod navigation;
pub mod storage;
pub mod store;

// Re-export commonly used state components
pub use context::LocaleContext;
pub use navigation::{MemoryNavigator, NavigateOptions, NavigationRecord, Navigator};
pub use storage::{ConfiguredPreferenceStore, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use store::{LanguageChange, LanguageSource, LocaleStore};
