//! Translation key resolution
//!
//! Resolves dotted keys (`"nav.home"`, `"admin.users.title"`) against a
//! language's tree. Lookups never fail: an unresolved key degrades to a
//! literal string taken from the key itself.

use std::collections::HashMap;

use crate::i18n::index::TranslationIndex;
use crate::i18n::node::TranslationNode;
use crate::models::Language;
use crate::utils::logging;

/// Deepest key that is looked up; longer keys always fall back
const MAX_SEGMENTS: usize = 3;

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

/// Resolves translation keys against a [`TranslationIndex`]
#[derive(Debug, Clone, Copy)]
pub struct KeyResolver<'a> {
    index: &'a TranslationIndex,
}

impl<'a> KeyResolver<'a> {
    pub fn new(index: &'a TranslationIndex) -> Self {
        Self { index }
    }

    /// Resolve `path` for `language`
    ///
    /// - A language missing from the index returns `path` unchanged.
    /// - Keys of one to three segments return the leaf they name.
    /// - Anything that does not reach a leaf (missing segment, a section where
    ///   text was expected, text where a section was expected, more than three
    ///   segments) returns the last segment of `path`.
    pub fn resolve(&self, language: Language, path: &str) -> String {
        let Some(root) = self.index.root(language) else {
            logging::log_unresolved_key(language, path, path);
            return path.to_string();
        };

        // `[key]`, `[section, key]` or `[section, subsection, key]`
        let segments: Vec<&str> = path.split('.').collect();
        let found = if segments.len() <= MAX_SEGMENTS {
            self.leaf(root, &segments)
        } else {
            None
        };

        match found {
            Some(text) => text.to_string(),
            None => {
                let fallback = last_segment(path);
                logging::log_unresolved_key(language, path, fallback);
                fallback.to_string()
            }
        }
    }

    /// Resolve `path` and substitute `{name}` placeholders from `params`
    pub fn resolve_with_params(
        &self,
        language: Language,
        path: &str,
        params: &TranslationParams,
    ) -> String {
        format_message(&self.resolve(language, path), Some(params))
    }

    fn leaf(&self, root: &'a TranslationNode, segments: &[&str]) -> Option<&'a str> {
        segments
            .iter()
            .try_fold(root, |node, segment| self.index.child(node, segment))
            .and_then(TranslationNode::as_leaf)
    }
}

/// Last `.`-separated segment of a key; the whole key when it has no dots
fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

/// Format message with parameters
///
/// `{name}` placeholders are filled in a single pass over the template, so
/// braces inside substituted values are left alone. Unknown placeholders stay
/// as written.
pub fn format_message(template: &str, params: Option<&TranslationParams>) -> String {
    let Some(params) = params else {
        return template.to_string();
    };

    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(|c| c == '{' || c == '}') {
            Some(close) if after[close..].starts_with('}') => {
                let name = &after[..close];
                match params.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        result.push('{');
                        result.push_str(name);
                        result.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}
