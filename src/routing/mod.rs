//! Locale-aware routing
//!
//! Pure helpers that read and write the language prefix of application paths.

pub mod codec;

pub use codec::{decode_language_from_path, encode, strip_language_prefix};
