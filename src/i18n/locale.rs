// SPDX-License-Identifier: MPL-2.0
//! The two display languages and their code conversions.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A supported display language. Ukrainian is the primary locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Uk,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Uk, Locale::En];

    /// Short code used for persistence and dictionary file names.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Uk => "uk",
            Locale::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::Uk => Locale::En,
            Locale::En => Locale::Uk,
        }
    }

    /// Label of the language switch, which always names the *other* locale.
    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::Uk => "EN",
            Locale::En => "УК",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&LanguageIdentifier> for Locale {
    type Error = Error;

    fn try_from(langid: &LanguageIdentifier) -> Result<Self, Self::Error> {
        match langid.language.as_str() {
            "uk" => Ok(Locale::Uk),
            "en" => Ok(Locale::En),
            other => Err(Error::Locale(format!("unsupported language: {}", other))),
        }
    }
}

impl From<Locale> for LanguageIdentifier {
    fn from(locale: Locale) -> Self {
        let tag = match locale {
            Locale::Uk => "uk-UA",
            Locale::En => "en-US",
        };
        tag.parse().unwrap_or_default()
    }
}

/// Accepts bare codes (`uk`) as well as full tags (`en-US`, `uk_UA`).
impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let langid: LanguageIdentifier = trimmed
            .parse()
            .map_err(|_| Error::Locale(format!("invalid locale tag: {}", trimmed)))?;
        Locale::try_from(&langid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_codes() {
        assert_eq!("uk".parse::<Locale>().unwrap(), Locale::Uk);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn parses_region_tags() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("uk-UA".parse::<Locale>().unwrap(), Locale::Uk);
    }

    #[test]
    fn rejects_other_languages() {
        assert!(matches!("fr".parse::<Locale>(), Err(Error::Locale(_))));
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn toggled_twice_is_identity() {
        for locale in Locale::ALL {
            assert_eq!(locale.toggled().toggled(), locale);
            assert_ne!(locale.toggled(), locale);
        }
    }

    #[test]
    fn switch_label_names_the_other_locale() {
        assert_eq!(Locale::Uk.switch_label(), "EN");
        assert_eq!(Locale::En.switch_label(), "УК");
    }

    #[test]
    fn default_is_ukrainian() {
        assert_eq!(Locale::default(), Locale::Uk);
    }

    #[test]
    fn language_identifier_round_trip_keeps_language() {
        let langid: LanguageIdentifier = Locale::En.into();
        assert_eq!(Locale::try_from(&langid).unwrap(), Locale::En);
    }
}
