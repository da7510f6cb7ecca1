//! Language model
//!
//! The closed set of languages the marketplace ships with. `Ko` is the
//! default language and is never written as a path prefix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::errors::LocaleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ko,
    En,
    Jp,
}

impl Language {
    /// Language used when neither the path nor the stored preference names one
    pub const DEFAULT: Language = Language::Ko;

    /// Every supported language, default first
    pub const ALL: [Language; 3] = [Language::Ko, Language::En, Language::Jp];

    /// Short code used in paths, translation file names and the preference store
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Jp => "jp",
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::Ko => "Korean",
            Language::En => "English",
            Language::Jp => "Japanese",
        }
    }

    /// Name of the language in the language itself, as shown by the switcher
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Ko => "한국어",
            Language::En => "English",
            Language::Jp => "日本語",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Languages that are written as a path prefix
    pub fn prefixed() -> impl Iterator<Item = Language> {
        Self::ALL.into_iter().filter(|lang| !lang.is_default())
    }

    /// Look up a language by code, returning `None` for anything unsupported
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| LocaleError::UnsupportedLanguage(s.to_string()))
    }
}
