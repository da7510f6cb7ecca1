//! Language prefixes on application paths
//!
//! Non-default languages are carried as a leading path segment
//! (`/en/resources`, `/jp/services`). The default language is never
//! prefixed. Paths are otherwise treated as opaque strings: query strings and
//! fragments pass through untouched.

use crate::models::Language;

/// Characters that may follow a language code for it to count as a segment
fn is_segment_boundary(rest: &str) -> bool {
    matches!(rest.chars().next(), None | Some('/') | Some('?') | Some('#'))
}

/// Remainder of `path` after `/<code>` when it starts with that segment
fn strip_code<'a>(path: &'a str, language: Language) -> Option<&'a str> {
    let rest = path.strip_prefix('/')?.strip_prefix(language.code())?;
    is_segment_boundary(rest).then_some(rest)
}

/// Non-default language whose prefix starts `path`
///
/// Returns `None` when the path carries no recognized prefix, which means the
/// default language.
pub fn decode_language_from_path(path: &str) -> Option<Language> {
    Language::prefixed().find(|language| strip_code(path, *language).is_some())
}

/// `path` without any leading language prefix
///
/// Stacked prefixes (`/en/jp/x`) are all removed.
pub fn strip_language_prefix(path: &str) -> &str {
    let mut rest = path;
    while let Some(stripped) = Language::prefixed().find_map(|language| strip_code(rest, language)) {
        rest = stripped;
    }
    rest
}

/// Rewrite `path` for `language`
///
/// A prefix is recognized only as `/<code>` followed by `/`, `?`, `#` or the
/// end of the path, the same rule `decode_language_from_path` applies.
///
/// - Default language: every leading prefix is removed, so the result never
///   decodes to a language. A path without one is returned unchanged.
/// - Other languages: the leading prefix, if any, is replaced by `/<code>`,
///   with a single `/` between the prefix and the rest of the path.
///
/// `encode(&encode(p, l), l) == encode(p, l)` for every path and language.
pub fn encode(path: &str, language: Language) -> String {
    if language.is_default() {
        let rest = strip_language_prefix(path);
        if rest.len() == path.len() {
            path.to_string()
        } else if rest.starts_with('/') {
            rest.to_string()
        } else {
            format!("/{}", rest)
        }
    } else {
        let rest = Language::prefixed()
            .find_map(|prefixed| strip_code(path, prefixed))
            .unwrap_or(path);
        format!("/{}/{}", language.code(), rest.trim_start_matches('/'))
    }
}
