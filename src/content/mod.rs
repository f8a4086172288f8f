// SPDX-License-Identifier: MPL-2.0
//! Static bilingual content: the experts directory and the news feed.
//!
//! Texts that live outside the dictionaries are stored as [`Localized`]
//! pairs and selected by the active [`Locale`].

pub mod experts;
pub mod news;

use crate::i18n::Locale;

/// One value per supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<T> {
    pub uk: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub const fn new(uk: T, en: T) -> Self {
        Self { uk, en }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Uk => &self.uk,
            Locale::En => &self.en,
        }
    }
}

/// Where a photo comes from. Only local files are ever displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSource {
    Remote(&'static str),
    Local(&'static str),
}

impl PhotoSource {
    /// Classifies `source` by its scheme.
    pub fn parse(source: &'static str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            PhotoSource::Remote(source)
        } else {
            PhotoSource::Local(source)
        }
    }
}
