//! Translation index
//!
//! Immutable mapping from each loaded language to the root of its
//! translation tree. Trees may differ in shape between languages.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::i18n::node::TranslationNode;
use crate::models::Language;
use crate::utils::errors::{LocaleError, Result};

/// Per-language translation trees
#[derive(Debug, Clone, Default)]
pub struct TranslationIndex {
    trees: HashMap<Language, TranslationNode>,
}

impl TranslationIndex {
    /// Build an index from already constructed trees
    pub fn from_trees<I>(trees: I) -> Self
    where
        I: IntoIterator<Item = (Language, TranslationNode)>,
    {
        Self {
            trees: trees.into_iter().collect(),
        }
    }

    /// Build an index from one JSON document per language
    ///
    /// Every document must be an object; anything else is rejected.
    pub fn from_json_documents<I>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Language, Value)>,
    {
        let mut trees = HashMap::new();
        for (language, document) in documents {
            let root = Self::root_from_json(language, &document)?;
            debug!(language = %language, keys = root.leaf_count(), "Indexed translations");
            trees.insert(language, root);
        }
        Ok(Self { trees })
    }

    /// Build an index from a single document keyed by language code,
    /// e.g. `{"ko": {...}, "en": {...}}`
    ///
    /// Top-level keys that are not supported language codes are skipped.
    pub fn from_json(document: &Value) -> Result<Self> {
        let Value::Object(by_code) = document else {
            return Err(LocaleError::InvalidTranslationFile {
                language: "*".to_string(),
                reason: "expected an object keyed by language code".to_string(),
            });
        };

        let mut documents = Vec::with_capacity(by_code.len());
        for (code, tree) in by_code {
            match Language::from_code(code) {
                Some(language) => documents.push((language, tree.clone())),
                None => warn!(code = %code, "Ignoring translations for unsupported language"),
            }
        }

        Self::from_json_documents(documents)
    }

    fn root_from_json(language: Language, document: &Value) -> Result<TranslationNode> {
        if !document.is_object() {
            return Err(LocaleError::InvalidTranslationFile {
                language: language.code().to_string(),
                reason: "root must be an object".to_string(),
            });
        }

        TranslationNode::from_json(document).ok_or_else(|| LocaleError::InvalidTranslationFile {
            language: language.code().to_string(),
            reason: "root could not be read".to_string(),
        })
    }

    /// Root of a language's tree, or `None` when the language was not loaded
    pub fn root(&self, language: Language) -> Option<&TranslationNode> {
        self.trees.get(&language)
    }

    /// Child of `node` named `segment`
    pub fn child<'a>(&self, node: &'a TranslationNode, segment: &str) -> Option<&'a TranslationNode> {
        node.child(segment)
    }

    pub fn contains_language(&self, language: Language) -> bool {
        self.trees.contains_key(&language)
    }

    /// Loaded languages in the order of `Language::ALL`
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|language| self.trees.contains_key(language))
            .collect()
    }

    /// Get translation statistics
    pub fn stats(&self) -> TranslationStats {
        let mut stats = TranslationStats {
            languages: Vec::new(),
            total_keys: 0,
        };

        for language in self.languages() {
            let key_count = self.trees.get(&language).map_or(0, TranslationNode::leaf_count);
            stats.languages.push(LanguageStats { language, key_count });
            if language.is_default() {
                stats.total_keys = key_count;
            }
        }

        stats
    }

    /// Dotted keys present for the default language but missing for `language`
    pub fn missing_keys(&self, language: Language) -> Vec<String> {
        let Some(reference) = self.root(Language::DEFAULT) else {
            return Vec::new();
        };
        let target = self.root(language);

        let mut missing: Vec<String> = reference
            .leaf_keys()
            .into_iter()
            .filter(|key| {
                let found = target.and_then(|root| {
                    key.split('.')
                        .try_fold(root, |node, segment| node.child(segment))
                });
                !matches!(found, Some(TranslationNode::Leaf(_)))
            })
            .collect();
        missing.sort();
        missing
    }
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub language: Language,
    pub key_count: usize,
}
