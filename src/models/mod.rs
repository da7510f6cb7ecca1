//! Data models module
//!
//! This module contains the data structures shared by the i18n, routing and
//! state modules.

pub mod language;

pub use language::Language;
