// SPDX-License-Identifier: MPL-2.0
use ai_center::app::config::{self, Config};
use ai_center::app::{Page, Route, Router};
use ai_center::content::experts;
use ai_center::i18n::{ConfigStorage, Dictionaries, Locale, LocaleStore, MemoryStorage};
use tempfile::tempdir;

fn embedded() -> Dictionaries {
    Dictionaries::embedded().expect("embedded dictionaries")
}

/// Dotted keys ending on a string in both dictionaries.
fn shared_text_keys(dictionaries: &Dictionaries) -> Vec<String> {
    let uk = dictionaries.get(Locale::Uk);
    let en = dictionaries.get(Locale::En);
    uk.leaf_paths()
        .into_iter()
        .filter(|key| uk.text(key).is_some() && en.text(key).is_some())
        .collect()
}

#[test]
fn language_choice_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut first = LocaleStore::new(embedded(), Box::new(ConfigStorage::with_dir(dir.path())));
    assert_eq!(first.locale(), Locale::Uk);
    first.toggle().expect("persist language");
    assert_eq!(first.locale(), Locale::En);

    let second = LocaleStore::new(embedded(), Box::new(ConfigStorage::with_dir(dir.path())));
    assert_eq!(second.locale(), Locale::En);
    assert_eq!(second.resolve("header.nav.home"), "Home");

    let saved = config::load_from_path(&dir.path().join("settings.toml")).expect("settings file");
    assert_eq!(saved.general.language.as_deref(), Some("en"));
}

#[test]
fn persisting_language_keeps_other_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.animation.enabled = false;
    initial.animation.node_count = Some(20);
    config::save_to_path(&initial, &path).expect("write settings");

    let mut store = LocaleStore::new(embedded(), Box::new(ConfigStorage::with_dir(dir.path())));
    store.set_locale(Locale::En).expect("persist language");

    let saved = config::load_from_path(&path).expect("settings file");
    assert_eq!(saved.general.language.as_deref(), Some("en"));
    assert!(!saved.animation.enabled);
    assert_eq!(saved.animation.node_count(), 20);
}

#[test]
fn invalid_persisted_language_starts_in_ukrainian() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"klingon\"\n",
    )
    .expect("write settings");

    let store = LocaleStore::new(embedded(), Box::new(ConfigStorage::with_dir(dir.path())));
    assert_eq!(store.locale(), Locale::Uk);
}

#[test]
fn every_shared_key_resolves_to_a_translation() {
    let dictionaries = embedded();
    let keys = shared_text_keys(&dictionaries);
    assert!(!keys.is_empty());

    for locale in Locale::ALL {
        let store = LocaleStore::new(embedded(), Box::new(MemoryStorage::new(Some(locale))));
        for key in &keys {
            assert_ne!(store.resolve(key), key.as_str(), "{} in {}", key, locale);
        }
    }
}

#[test]
fn missing_keys_resolve_to_themselves() {
    let store = LocaleStore::new(embedded(), Box::new(MemoryStorage::new(None)));
    for key in ["header.missing", "nonexistent", "", "header", "header.nav.home.deeper"] {
        assert_eq!(store.resolve(key), key);
    }
}

#[test]
fn toggling_twice_restores_every_string() {
    let dictionaries = embedded();
    let keys = shared_text_keys(&dictionaries);

    let mut store = LocaleStore::new(dictionaries, Box::new(MemoryStorage::new(None)));
    let before: Vec<String> = keys.iter().map(|key| store.tr(key)).collect();

    store.toggle().expect("memory storage");
    let toggled: Vec<String> = keys.iter().map(|key| store.tr(key)).collect();
    assert_ne!(before, toggled);

    store.toggle().expect("memory storage");
    let after: Vec<String> = keys.iter().map(|key| store.tr(key)).collect();
    assert_eq!(store.locale(), Locale::Uk);
    assert_eq!(before, after);
}

#[test]
fn news_page_shows_footer() {
    let mut router = Router::new();
    router.navigate(Page::News);
    assert_eq!(router.page(), Page::News);
    assert!(router.footer_visible());
}

#[test]
fn unknown_expert_renders_not_found_and_recovers() {
    let store = LocaleStore::new(embedded(), Box::new(MemoryStorage::new(None)));
    let mut router = Router::new();

    router.select_expert("unknown-id");
    assert_eq!(router.route(|id| experts::is_known(&store, id)), Route::ExpertNotFound);
    assert!(!router.footer_visible());

    router.back_to_list();
    assert_eq!(router.page(), Page::ExpertsList);
    assert_eq!(router.route(|id| experts::is_known(&store, id)), Route::ExpertsList);
}

#[test]
fn known_expert_then_back_to_list() {
    let store = LocaleStore::new(embedded(), Box::new(MemoryStorage::new(None)));
    let mut router = Router::new();

    router.select_expert("petrenko");
    assert_eq!(
        router.route(|id| experts::is_known(&store, id)),
        Route::ExpertDetail("petrenko")
    );

    router.back_to_list();
    assert_eq!(router.page(), Page::ExpertsList);
    assert_eq!(router.selected_expert(), None);
}

#[test]
fn every_profiled_card_has_a_profile_in_both_locales() {
    for locale in Locale::ALL {
        let store = LocaleStore::new(embedded(), Box::new(MemoryStorage::new(Some(locale))));
        let profiled: Vec<_> = experts::CARDS
            .iter()
            .filter_map(|card| experts::profile(&store, card.id))
            .collect();
        assert_eq!(profiled.len(), 6);
        for profile in profiled {
            assert!(!profile.skills.is_empty());
            assert!(!profile.achievements.is_empty());
            assert_eq!(profile.publications_label(), format!("{}+", profile.papers.len()));
        }
    }
}
