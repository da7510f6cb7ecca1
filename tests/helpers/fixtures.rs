//! Translation fixtures

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};
use MarketLocale::config::I18nConfig;
use MarketLocale::state::{LocaleContext, MemoryNavigator, MemoryPreferenceStore};
use MarketLocale::TranslationIndex;

pub const PREFERENCE_KEY: &str = "language";

/// Translation document covering the marketplace navigation and a few screens
pub fn marketplace_translations() -> Value {
    json!({
        "ko": {
            "nav": {
                "home": "홈",
                "resources": "자료실",
                "services": "서비스"
            },
            "resources": {
                "upload": { "title": "자료 업로드", "submit": "등록" }
            },
            "payment": {
                "sponsor": { "thanks": "{name}님, 후원 감사합니다" }
            },
            "brand": "마켓"
        },
        "en": {
            "nav": {
                "home": "Home",
                "resources": "Resources"
            },
            "resources": {
                "upload": { "title": "Upload resource" }
            },
            "payment": {
                "sponsor": { "thanks": "Thank you for your support, {name}" }
            },
            "brand": "Market"
        },
        "jp": {
            "nav": { "home": "ホーム" }
        }
    })
}

pub fn marketplace_index() -> Arc<TranslationIndex> {
    Arc::new(TranslationIndex::from_json(&marketplace_translations()).expect("fixture should be valid"))
}

pub fn i18n_config() -> I18nConfig {
    I18nConfig {
        translations_dir: "translations".to_string(),
        preference_key: PREFERENCE_KEY.to_string(),
    }
}

/// Context over the marketplace fixture with an in-memory navigator
pub fn memory_context(
    path: &str,
    preferences: MemoryPreferenceStore,
) -> LocaleContext<MemoryNavigator, MemoryPreferenceStore> {
    LocaleContext::new(marketplace_index(), MemoryNavigator::new(path), preferences, &i18n_config())
}

/// Write each language of the fixture as `<code>.json` into `dir`
pub fn write_translation_dir(dir: &Path) {
    let document = marketplace_translations();
    if let Value::Object(by_code) = document {
        for (code, tree) in by_code {
            let content = serde_json::to_string_pretty(&tree).expect("fixture should serialize");
            std::fs::write(dir.join(format!("{}.json", code)), content)
                .expect("Failed to write translation file");
        }
    }
}
