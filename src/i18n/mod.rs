// SPDX-License-Identifier: MPL-2.0
//! Internationalization support for the application.
//!
//! Two static dictionaries (Ukrainian and English) are embedded from
//! `assets/i18n/*.toml`. The [`LocaleStore`] holds the active language,
//! persists it through a [`LocaleStorage`], and resolves dotted keys.
//!
//! # Features
//!
//! - Start-up locale from CLI, then `settings.toml`, then Ukrainian
//! - Runtime language switching with persistence
//! - Missing keys render as the key itself

pub mod dictionary;
pub mod locale;
pub mod store;

pub use dictionary::{Dictionaries, Dictionary, Entry};
pub use locale::Locale;
pub use store::{ConfigStorage, LocaleStorage, LocaleStore, MemoryStorage};

use std::path::Path;

/// Loads dictionaries from `dir` when given, otherwise the embedded set.
///
/// Failures are logged and fall back one level: override directory, then
/// embedded resources, then empty dictionaries.
pub fn load_dictionaries(dir: Option<&Path>) -> Dictionaries {
    if let Some(dir) = dir {
        match Dictionaries::from_dir(dir) {
            Ok(dictionaries) => return dictionaries,
            Err(err) => log::warn!(
                "failed to load translations from {}: {}",
                dir.display(),
                err
            ),
        }
    }
    Dictionaries::embedded().unwrap_or_else(|err| {
        log::warn!("embedded translations unavailable: {}", err);
        Dictionaries::empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_override_dir_falls_back_to_embedded() {
        let dir = tempdir().expect("temp dir");
        let dictionaries = load_dictionaries(Some(&dir.path().join("absent")));
        assert_eq!(
            dictionaries.get(Locale::En).text("footer.contact"),
            Some("Contact")
        );
    }

    #[test]
    fn no_override_uses_embedded() {
        let dictionaries = load_dictionaries(None);
        assert!(!dictionaries.get(Locale::Uk).is_empty());
    }
}
