//! Locale context handed to every screen
//!
//! [`LocaleContext`] bundles the shared translation index, the session's
//! [`LocaleStore`] and the host navigator behind the four operations screens
//! use: the current language, `translate`, `format_url` and `set_language`.

use std::sync::Arc;

use crate::config::I18nConfig;
use crate::i18n::{KeyResolver, TranslationIndex, TranslationParams};
use crate::models::Language;
use crate::routing::codec;
use crate::state::navigation::Navigator;
use crate::state::storage::PreferenceStore;
use crate::state::store::{LanguageChange, LocaleStore};

/// Per-session locale context
#[derive(Debug)]
pub struct LocaleContext<N: Navigator, P: PreferenceStore> {
    index: Arc<TranslationIndex>,
    store: LocaleStore<P>,
    navigator: N,
}

impl<N: Navigator, P: PreferenceStore> LocaleContext<N, P> {
    /// Create the context and initialize the active language from the
    /// navigator's current path and the preference store
    pub fn new(index: Arc<TranslationIndex>, navigator: N, preferences: P, config: &I18nConfig) -> Self {
        let current_path = navigator.current_path();
        let store = LocaleStore::initialize(preferences, &config.preference_key, &current_path);

        Self {
            index,
            store,
            navigator,
        }
    }

    /// Currently active language
    pub fn current_language(&self) -> Language {
        self.store.language()
    }

    /// Text for a dotted key in the current language
    pub fn translate(&self, key: &str) -> String {
        KeyResolver::new(&self.index).resolve(self.current_language(), key)
    }

    /// Text for a dotted key with `{name}` placeholders filled in
    pub fn translate_with(&self, key: &str, params: &TranslationParams) -> String {
        KeyResolver::new(&self.index).resolve_with_params(self.current_language(), key, params)
    }

    /// Link target for `path` in the current language
    ///
    /// A path that already carries the current language's prefix is returned
    /// as given.
    pub fn format_url(&self, path: &str) -> String {
        let language = self.current_language();
        if !language.is_default() && codec::decode_language_from_path(path) == Some(language) {
            return path.to_string();
        }
        codec::encode(path, language)
    }

    /// Switch the active language, navigating and persisting as needed
    pub fn set_language(&mut self, language: Language) -> Option<LanguageChange> {
        self.store.set_language(language, &mut self.navigator)
    }

    /// Follow a back/forward or other externally driven location change
    pub fn handle_location_change(&mut self, path: &str) -> Language {
        self.store.handle_location_change(path)
    }

    pub fn index(&self) -> &Arc<TranslationIndex> {
        &self.index
    }

    pub fn store(&self) -> &LocaleStore<P> {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }
}
