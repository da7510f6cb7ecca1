//! Translation loader
//!
//! Reads one `<code>.json` file per supported language from the configured
//! translations directory and builds the [`TranslationIndex`].

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;
use tracing::{debug, error, info, warn};

use crate::config::I18nConfig;
use crate::i18n::index::TranslationIndex;
use crate::models::Language;
use crate::utils::errors::{LocaleError, Result};

/// Loads translation files from disk
#[derive(Debug, Clone)]
pub struct TranslationLoader {
    translations_dir: PathBuf,
}

impl TranslationLoader {
    /// Create a loader for the directory named in the configuration
    pub fn new(config: &I18nConfig) -> Self {
        Self::from_dir(&config.translations_dir)
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            translations_dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn translations_dir(&self) -> &Path {
        &self.translations_dir
    }

    /// Load all translation files from the translations directory
    ///
    /// The default language's file is required. A missing or unreadable file
    /// for any other language is logged and that language is left out, so
    /// lookups for it return the key unchanged.
    pub async fn load(&self) -> Result<TranslationIndex> {
        let mut documents = Vec::with_capacity(Language::ALL.len());

        for language in Language::ALL {
            let file_path = self.file_path(language);

            if !fs::try_exists(&file_path).await.unwrap_or(false) {
                warn!("Translation file not found: {}", file_path.display());
                if language.is_default() {
                    return Err(LocaleError::Config(format!(
                        "Default language translation file not found: {}",
                        file_path.display()
                    )));
                }
                continue;
            }

            match self.load_language_file(&file_path, language).await {
                Ok(document) => {
                    info!("Loaded translations for language: {}", language);
                    documents.push((language, document));
                }
                Err(e) => {
                    error!("Failed to load translations for {}: {}", language, e);
                    if language.is_default() {
                        return Err(LocaleError::Config(format!(
                            "Failed to load default language translations: {}",
                            e
                        )));
                    }
                }
            }
        }

        TranslationIndex::from_json_documents(documents)
    }

    /// Load a single language file
    async fn load_language_file(&self, file_path: &Path, language: Language) -> Result<Value> {
        let content = fs::read_to_string(file_path).await?;
        let document: Value = serde_json::from_str(&content)?;

        let Some(sections) = document.as_object().map(|map| map.len()) else {
            return Err(LocaleError::InvalidTranslationFile {
                language: language.code().to_string(),
                reason: format!("{} does not contain a JSON object", file_path.display()),
            });
        };

        debug!("Loaded {} top-level translation sections for {}", sections, language);
        Ok(document)
    }

    fn file_path(&self, language: Language) -> PathBuf {
        self.translations_dir.join(format!("{}.json", language.code()))
    }
}
