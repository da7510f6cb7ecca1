//! End-to-end tests for the locale context
//!
//! These tests drive a full session the way screens do: initialize from the
//! current path and stored preference, translate, build links, switch language
//! and follow back/forward navigation.

mod helpers;

use helpers::*;
use MarketLocale::i18n::TranslationParams;
use MarketLocale::state::{LanguageSource, LocaleContext, MemoryNavigator, MemoryPreferenceStore, NavigateOptions, Navigator};
use MarketLocale::Language;

/// Path prefix takes priority over the stored preference
#[test]
fn test_initialize_path_wins_over_preference() {
    init_test_logging();

    let ctx = memory_context(
        "/jp/resources",
        MemoryPreferenceStore::with_value(PREFERENCE_KEY, "en"),
    );

    assert_eq!(ctx.current_language(), Language::Jp);
    assert_eq!(ctx.store().source(), LanguageSource::Path);
}

/// Stored preference applies when the path has no prefix
#[test]
fn test_initialize_from_preference() {
    init_test_logging();

    let ctx = memory_context("/services", MemoryPreferenceStore::with_value(PREFERENCE_KEY, "en"));

    assert_eq!(ctx.current_language(), Language::En);
    assert_eq!(ctx.translate("nav.home"), "Home");
    assert_eq!(ctx.format_url("/resources"), "/en/resources");
}

/// Switching language replaces the location and persists the choice
#[test]
fn test_set_language_from_default() {
    init_test_logging();

    let mut ctx = memory_context("/services", MemoryPreferenceStore::new());
    assert_eq!(ctx.current_language(), Language::Ko);

    let change = ctx.set_language(Language::En).expect("language should change");

    assert_eq!(change.path, "/en/services");
    assert_eq!(ctx.current_language(), Language::En);
    assert_eq!(ctx.navigator().current_path(), "/en/services");
    assert_eq!(ctx.navigator().history().len(), 1);
    assert_eq!(ctx.navigator().last_request().unwrap().options, NavigateOptions::REPLACE);
    assert_eq!(ctx.store().preferences().get(PREFERENCE_KEY), Some("en"));
}

/// Switching to the active language does nothing
#[test]
fn test_set_language_noop() {
    init_test_logging();

    let mut ctx = memory_context("/en/services", MemoryPreferenceStore::new());

    assert!(ctx.set_language(Language::En).is_none());
    assert!(ctx.navigator().requests().is_empty());
    assert_eq!(ctx.store().preferences().get(PREFERENCE_KEY), None);
}

/// A failed preference write keeps the switch and the navigation
#[test]
fn test_persistence_failure_does_not_roll_back() {
    init_test_logging();

    let mut ctx = LocaleContext::new(
        marketplace_index(),
        MemoryNavigator::new("/services"),
        FlakyPreferenceStore::failing_writes(None),
        &i18n_config(),
    );

    let change = ctx.set_language(Language::Jp).expect("language should change");

    assert_eq!(change.path, "/jp/services");
    assert_eq!(ctx.current_language(), Language::Jp);
    assert_eq!(ctx.navigator().current_path(), "/jp/services");
    assert_eq!(ctx.store().preferences().write_attempts, 1);
    assert_eq!(ctx.store().persisted_preference(), None);
}

/// An unreadable preference store falls back to the default language
#[test]
fn test_unreadable_preference_uses_default() {
    init_test_logging();

    let ctx = LocaleContext::new(
        marketplace_index(),
        MemoryNavigator::new("/resources"),
        FlakyPreferenceStore::failing_reads(),
        &i18n_config(),
    );

    assert_eq!(ctx.current_language(), Language::Ko);
    assert_eq!(ctx.translate("brand"), "마켓");
}

/// Back/forward navigation re-derives the language from the path only
#[test]
fn test_external_navigation() {
    init_test_logging();

    let mut ctx = memory_context("/resources", MemoryPreferenceStore::with_value(PREFERENCE_KEY, "en"));
    assert_eq!(ctx.current_language(), Language::En);

    ctx.navigator_mut().navigate("/jp/services", NavigateOptions::PUSH);
    let path = ctx.navigator().current_path();
    assert_eq!(ctx.handle_location_change(&path), Language::Jp);
    assert_eq!(ctx.translate("nav.home"), "ホーム");

    let previous = ctx.navigator_mut().back().expect("history should have a previous entry");
    assert_eq!(previous, "/resources");
    assert_eq!(ctx.handle_location_change(&previous), Language::Ko);
    assert_eq!(ctx.translate("nav.home"), "홈");
}

/// Switching after external navigation re-encodes the latest path
#[test]
fn test_set_language_uses_latest_path() {
    init_test_logging();

    let mut ctx = memory_context("/", MemoryPreferenceStore::new());

    ctx.navigator_mut().navigate("/en/resources?page=2", NavigateOptions::PUSH);
    let path = ctx.navigator().current_path();
    ctx.handle_location_change(&path);

    let change = ctx.set_language(Language::Ko).expect("language should change");
    assert_eq!(change.from, Language::En);
    assert_eq!(change.path, "/resources?page=2");
    assert_eq!(ctx.navigator().history(), ["/".to_string(), "/resources?page=2".to_string()]);
}

/// Same-language navigation the host never reports is still picked up by a switch
#[test]
fn test_set_language_after_unreported_navigation() {
    init_test_logging();

    let mut ctx = memory_context("/services", MemoryPreferenceStore::new());
    ctx.navigator_mut().navigate("/resources", NavigateOptions::PUSH);

    let change = ctx.set_language(Language::En).expect("language should change");

    assert_eq!(change.path, "/en/resources");
    assert_eq!(ctx.navigator().current_path(), "/en/resources");
    assert_eq!(ctx.navigator().history(), ["/services".to_string(), "/en/resources".to_string()]);
    assert_eq!(ctx.store().current_path(), "/en/resources");
}

/// Fallback strings follow the last-segment rule
#[test]
fn test_translation_fallbacks() {
    init_test_logging();

    let mut ctx = memory_context("/", MemoryPreferenceStore::new());

    assert_eq!(ctx.translate("nav.home"), "홈");
    assert_eq!(ctx.translate("nav.missing"), "missing");
    assert_eq!(ctx.translate("resources.upload.title"), "자료 업로드");
    assert_eq!(ctx.translate("resources.upload.cancel"), "cancel");
    assert_eq!(ctx.translate("missing_label"), "missing_label");

    ctx.set_language(Language::En);
    // present in ko only
    assert_eq!(ctx.translate("nav.services"), "services");
    assert_eq!(ctx.translate("resources.upload.submit"), "submit");
}

/// Placeholders are filled in after resolution
#[test]
fn test_translate_with_params() {
    init_test_logging();

    let mut ctx = memory_context("/en/payment", MemoryPreferenceStore::new());
    let mut params = TranslationParams::new();
    params.insert("name".to_string(), "Dana".to_string());

    assert_eq!(
        ctx.translate_with("payment.sponsor.thanks", &params),
        "Thank you for your support, Dana"
    );

    ctx.set_language(Language::Ko);
    assert_eq!(
        ctx.translate_with("payment.sponsor.thanks", &params),
        "Dana님, 후원 감사합니다"
    );
}

/// Independent sessions share the index but not their state
#[test]
fn test_sessions_are_independent() {
    init_test_logging();

    let index = marketplace_index();
    let mut first = LocaleContext::new(
        index.clone(),
        MemoryNavigator::new("/services"),
        MemoryPreferenceStore::new(),
        &i18n_config(),
    );
    let second = LocaleContext::new(
        index.clone(),
        MemoryNavigator::new("/services"),
        MemoryPreferenceStore::new(),
        &i18n_config(),
    );

    first.set_language(Language::Jp);

    assert_eq!(first.current_language(), Language::Jp);
    assert_eq!(second.current_language(), Language::Ko);
    assert_eq!(second.navigator().current_path(), "/services");
    assert!(std::sync::Arc::ptr_eq(first.index(), second.index()));
}
