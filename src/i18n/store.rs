// SPDX-License-Identifier: MPL-2.0
//! The active locale, its persistence, and key resolution.

use super::dictionary::Dictionaries;
use super::locale::Locale;
use crate::app::config;
use crate::error::Result;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// Key-value side channel holding the persisted locale choice.
pub trait LocaleStorage: Send {
    /// The stored locale, or `None` when absent or unreadable.
    fn load(&self) -> Option<Locale>;

    fn save(&mut self, locale: Locale) -> Result<()>;
}

/// Persists the locale as `[general] language` in `settings.toml`.
#[derive(Debug, Clone, Default)]
pub struct ConfigStorage {
    config_dir: Option<PathBuf>,
}

impl ConfigStorage {
    /// Uses the resolved application config directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(config_dir.into()),
        }
    }
}

impl LocaleStorage for ConfigStorage {
    fn load(&self) -> Option<Locale> {
        let (config, _) = config::load_with_override(self.config_dir.clone());
        let raw = config.general.language?;
        match raw.parse::<Locale>() {
            Ok(locale) => Some(locale),
            Err(err) => {
                log::warn!("ignoring stored language {:?}: {}", raw, err);
                None
            }
        }
    }

    fn save(&mut self, locale: Locale) -> Result<()> {
        let (mut config, _) = config::load_with_override(self.config_dir.clone());
        config.general.language = Some(locale.code().to_string());
        config::save_with_override(&config, self.config_dir.clone())
    }
}

/// In-memory storage. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<Locale>>>,
}

impl MemoryStorage {
    pub fn new(initial: Option<Locale>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(initial)),
        }
    }

    pub fn stored(&self) -> Option<Locale> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LocaleStorage for MemoryStorage {
    fn load(&self) -> Option<Locale> {
        self.stored()
    }

    fn save(&mut self, locale: Locale) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(locale);
        Ok(())
    }
}

/// Holds the active [`Locale`] and resolves dotted keys against it.
pub struct LocaleStore {
    dictionaries: Dictionaries,
    active: Locale,
    storage: Box<dyn LocaleStorage>,
}

impl LocaleStore {
    /// Starts in the stored locale, or the primary locale when none is stored.
    pub fn new(dictionaries: Dictionaries, storage: Box<dyn LocaleStorage>) -> Self {
        let active = storage.load().unwrap_or_default();
        Self {
            dictionaries,
            active,
            storage,
        }
    }

    pub fn locale(&self) -> Locale {
        self.active
    }

    /// Resolves `key` in the active dictionary. A missing path, one that
    /// does not end on a string, or an empty string yields `key` itself.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key)
            .filter(|value| !value.is_empty())
            .unwrap_or(key)
    }

    /// Owned form of [`resolve`](Self::resolve) for widget labels.
    pub fn tr(&self, key: &str) -> String {
        self.resolve(key).to_string()
    }

    /// The string at `key`, including an empty one.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.dictionaries.get(self.active).text(key)
    }

    /// String list at `key`; empty when absent.
    pub fn list(&self, key: &str) -> &[String] {
        self.dictionaries.get(self.active).list(key).unwrap_or(&[])
    }

    /// Switches locale and persists the choice. The in-memory switch stays
    /// in effect even when persisting fails.
    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        self.active = locale;
        self.storage.save(locale)
    }

    pub fn toggle(&mut self) -> Result<()> {
        self.set_locale(self.active.toggled())
    }

    /// Switches locale for this session only.
    pub fn override_session(&mut self, locale: Locale) {
        self.active = locale;
    }
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::i18n::dictionary::Dictionary;
    use tempfile::tempdir;

    fn sample_dictionaries() -> Dictionaries {
        Dictionaries::new(
            Dictionary::from_toml_str(
                "[header.nav]\nhome = \"Головна\"\n[tags]\nlist = [\"а\", \"б\"]",
            )
            .unwrap(),
            Dictionary::from_toml_str("[header.nav]\nhome = \"Home\"\n[tags]\nlist = [\"a\"]")
                .unwrap(),
        )
    }

    fn store_with(storage: MemoryStorage) -> LocaleStore {
        LocaleStore::new(sample_dictionaries(), Box::new(storage))
    }

    struct FailingStorage;

    impl LocaleStorage for FailingStorage {
        fn load(&self) -> Option<Locale> {
            None
        }

        fn save(&mut self, _locale: Locale) -> Result<()> {
            Err(Error::Io("read-only".into()))
        }
    }

    #[test]
    fn defaults_to_primary_locale_when_nothing_stored() {
        let store = store_with(MemoryStorage::default());
        assert_eq!(store.locale(), Locale::Uk);
        assert_eq!(store.resolve("header.nav.home"), "Головна");
    }

    #[test]
    fn starts_in_stored_locale() {
        let store = store_with(MemoryStorage::new(Some(Locale::En)));
        assert_eq!(store.locale(), Locale::En);
        assert_eq!(store.resolve("header.nav.home"), "Home");
    }

    #[test]
    fn missing_keys_resolve_to_themselves() {
        let store = store_with(MemoryStorage::default());
        assert_eq!(store.resolve("header.nav.missing"), "header.nav.missing");
        assert_eq!(store.resolve("header.nav"), "header.nav");
        assert_eq!(store.resolve("tags.list"), "tags.list");
        assert_eq!(store.lookup("header.nav"), None);
    }

    #[test]
    fn empty_leaf_resolves_to_key() {
        let dictionaries = Dictionaries::new(
            Dictionary::from_toml_str("[footer]\nnote = \"\"").unwrap(),
            Dictionary::from_toml_str("[footer]\nnote = \"\"").unwrap(),
        );
        let store = LocaleStore::new(dictionaries, Box::new(MemoryStorage::default()));
        assert_eq!(store.lookup("footer.note"), Some(""));
        assert_eq!(store.resolve("footer.note"), "footer.note");
    }

    #[test]
    fn set_locale_persists_choice() {
        let storage = MemoryStorage::default();
        let mut store = store_with(storage.clone());
        store.set_locale(Locale::En).unwrap();
        assert_eq!(store.locale(), Locale::En);
        assert_eq!(storage.stored(), Some(Locale::En));
    }

    #[test]
    fn toggle_twice_restores_strings() {
        let mut store = store_with(MemoryStorage::default());
        let before = store.tr("header.nav.home");
        store.toggle().unwrap();
        assert_ne!(store.tr("header.nav.home"), before);
        store.toggle().unwrap();
        assert_eq!(store.tr("header.nav.home"), before);
        assert_eq!(store.locale(), Locale::Uk);
    }

    #[test]
    fn failed_persist_keeps_new_locale() {
        let mut store = LocaleStore::new(sample_dictionaries(), Box::new(FailingStorage));
        assert!(store.set_locale(Locale::En).is_err());
        assert_eq!(store.locale(), Locale::En);
    }

    #[test]
    fn session_override_does_not_persist() {
        let storage = MemoryStorage::default();
        let mut store = store_with(storage.clone());
        store.override_session(Locale::En);
        assert_eq!(store.locale(), Locale::En);
        assert_eq!(storage.stored(), None);
    }

    #[test]
    fn list_follows_active_locale() {
        let mut store = store_with(MemoryStorage::default());
        assert_eq!(store.list("tags.list").len(), 2);
        store.override_session(Locale::En);
        assert_eq!(store.list("tags.list"), &["a".to_string()]);
        assert!(store.list("header.nav.home").is_empty());
    }

    #[test]
    fn config_storage_round_trips_through_settings_file() {
        let dir = tempdir().expect("temp dir");
        let mut storage = ConfigStorage::with_dir(dir.path());
        assert_eq!(storage.load(), None);

        storage.save(Locale::En).expect("save");
        assert_eq!(ConfigStorage::with_dir(dir.path()).load(), Some(Locale::En));
    }

    #[test]
    fn config_storage_ignores_unknown_language() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("settings.toml"),
            "[general]\nlanguage = \"fr\"\n",
        )
        .unwrap();
        assert_eq!(ConfigStorage::with_dir(dir.path()).load(), None);
    }

    #[test]
    fn config_storage_treats_unreadable_settings_as_unset() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("settings.toml"), "not = valid = toml").unwrap();

        let store = LocaleStore::new(
            sample_dictionaries(),
            Box::new(ConfigStorage::with_dir(dir.path())),
        );
        assert_eq!(store.locale(), Locale::Uk);
    }
}
