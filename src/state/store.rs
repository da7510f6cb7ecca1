//! Active language state
//!
//! One [`LocaleStore`] exists per visitor session. It decides the initial
//! language from the current path and the persisted preference, follows
//! external navigation, and applies language switches requested by the
//! visitor.

use tracing::debug;

use crate::models::Language;
use crate::routing::codec;
use crate::state::navigation::{NavigateOptions, Navigator};
use crate::state::storage::PreferenceStore;
use crate::utils::logging;

/// Where the active language came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    /// Prefix of the current path
    Path,
    /// Persisted preference, consulted only when the path has no prefix
    Preference,
    /// Neither named a non-default language
    Default,
    /// Explicit switch through `set_language`
    Selection,
}

impl LanguageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageSource::Path => "path",
            LanguageSource::Preference => "preference",
            LanguageSource::Default => "default",
            LanguageSource::Selection => "selection",
        }
    }
}

/// A language switch and the path it navigates to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChange {
    pub from: Language,
    pub to: Language,
    pub path: String,
}

/// Session language state
#[derive(Debug)]
pub struct LocaleStore<P: PreferenceStore> {
    language: Language,
    source: LanguageSource,
    current_path: String,
    persisted: Option<Language>,
    preferences: P,
    preference_key: String,
}

impl<P: PreferenceStore> LocaleStore<P> {
    /// Create the store and pick the initial language
    ///
    /// A language prefix on `current_path` wins. Without one, a persisted
    /// non-default language is adopted. Otherwise the default language is
    /// used. The preference store is read exactly once, here.
    pub fn initialize(preferences: P, preference_key: &str, current_path: &str) -> Self {
        let persisted = read_preference(&preferences, preference_key);

        let (language, source) = if let Some(language) = codec::decode_language_from_path(current_path) {
            (language, LanguageSource::Path)
        } else if let Some(language) = persisted.filter(|language| !language.is_default()) {
            (language, LanguageSource::Preference)
        } else {
            (Language::DEFAULT, LanguageSource::Default)
        };

        logging::log_language_adopted(language, source.as_str(), current_path);

        Self {
            language,
            source,
            current_path: current_path.to_string(),
            persisted,
            preferences,
            preference_key: preference_key.to_string(),
        }
    }

    /// Currently active language
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source(&self) -> LanguageSource {
        self.source
    }

    /// Path the store last saw, either from navigation events or its own switches
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Preference read at initialization, updated by successful writes
    pub fn persisted_preference(&self) -> Option<Language> {
        self.persisted
    }

    pub fn preference_key(&self) -> &str {
        &self.preference_key
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    /// Follow a location change that did not come from `set_language`
    ///
    /// Only the path is consulted; a path without a prefix means the default
    /// language even when a different preference is stored.
    pub fn handle_location_change(&mut self, path: &str) -> Language {
        let (language, source) = match codec::decode_language_from_path(path) {
            Some(language) => (language, LanguageSource::Path),
            None => (Language::DEFAULT, LanguageSource::Default),
        };

        if language != self.language {
            logging::log_language_adopted(language, source.as_str(), path);
        }

        self.language = language;
        self.source = source;
        self.current_path = path.to_string();
        language
    }

    /// Work out what switching to `language` would do, without doing it
    ///
    /// Returns `None` when `language` is already active.
    pub fn plan_language_change(&self, language: Language) -> Option<LanguageChange> {
        if language == self.language {
            return None;
        }

        Some(LanguageChange {
            from: self.language,
            to: language,
            path: codec::encode(&self.current_path, language),
        })
    }

    /// Switch to `language`
    ///
    /// Re-encodes the path `navigator` currently shows, so host navigation
    /// that was never reported through `handle_location_change` is not lost.
    /// Updates the state, asks `navigator` to replace the current location
    /// with the re-encoded path, then persists the choice. A failed write is
    /// logged and leaves the state and the navigation in place.
    pub fn set_language<N>(&mut self, language: Language, navigator: &mut N) -> Option<LanguageChange>
    where
        N: Navigator + ?Sized,
    {
        self.current_path = navigator.current_path();

        let Some(change) = self.plan_language_change(language) else {
            debug!(language = %language, "Language already active, nothing to do");
            return None;
        };

        self.language = change.to;
        self.source = LanguageSource::Selection;

        logging::log_navigation(&change.path, NavigateOptions::REPLACE.replace);
        navigator.navigate(&change.path, NavigateOptions::REPLACE);
        self.current_path = change.path.clone();

        match self.preferences.write(&self.preference_key, change.to.code()) {
            Ok(()) => self.persisted = Some(change.to),
            Err(e) => logging::log_preference_failure("write", &self.preference_key, &e),
        }

        logging::log_language_change(change.from, change.to, &change.path);
        Some(change)
    }
}

/// Stored language, ignoring unreadable stores and unsupported values
fn read_preference<P: PreferenceStore>(preferences: &P, key: &str) -> Option<Language> {
    match preferences.read(key) {
        Ok(Some(code)) => {
            let language = Language::from_code(&code);
            if language.is_none() {
                debug!(key = key, value = %code, "Ignoring unsupported stored language");
            }
            language
        }
        Ok(None) => None,
        Err(e) => {
            logging::log_preference_failure("read", key, &e);
            None
        }
    }
}
