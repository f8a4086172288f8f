// SPDX-License-Identifier: MPL-2.0
//! Nested translation dictionaries addressed by dotted key paths.
//!
//! A dictionary is a TOML document whose leaves are either strings or lists
//! of strings. Keys like `header.nav.home` walk the tables segment by
//! segment.

use super::locale::Locale;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// One node of a dictionary tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    List(Vec<String>),
    Table(BTreeMap<String, Entry>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    root: BTreeMap<String, Entry>,
}

impl Dictionary {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let root: BTreeMap<String, Entry> =
            toml::from_str(content).map_err(|e| Error::Dictionary(e.to_string()))?;
        Ok(Self { root })
    }

    /// Walks `key` through the tree. `None` when any segment is absent.
    pub fn lookup(&self, key: &str) -> Option<&Entry> {
        let mut segments = key.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            match current {
                Entry::Table(children) => current = children.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// String leaf at `key`, if the path ends on one.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.lookup(key)? {
            Entry::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.lookup(key)? {
            Entry::List(values) => Some(values),
            _ => None,
        }
    }

    /// Every dotted path that ends on a leaf, in sorted order.
    pub fn leaf_paths(&self) -> Vec<String> {
        fn walk(prefix: &str, table: &BTreeMap<String, Entry>, out: &mut Vec<String>) {
            for (name, entry) in table {
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                match entry {
                    Entry::Table(children) => walk(&path, children, out),
                    Entry::Text(_) | Entry::List(_) => out.push(path),
                }
            }
        }

        let mut paths = Vec::new();
        walk("", &self.root, &mut paths);
        paths
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

/// The pair of dictionaries, one per [`Locale`].
#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
    uk: Dictionary,
    en: Dictionary,
}

impl Dictionaries {
    pub fn new(uk: Dictionary, en: Dictionary) -> Self {
        Self { uk, en }
    }

    /// Dictionaries compiled into the binary from `assets/i18n/`.
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            uk: Self::embedded_one(Locale::Uk)?,
            en: Self::embedded_one(Locale::En)?,
        })
    }

    fn embedded_one(locale: Locale) -> Result<Dictionary> {
        let filename = format!("{}.toml", locale.code());
        let file = Asset::get(&filename)
            .ok_or_else(|| Error::Dictionary(format!("embedded {} not found", filename)))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| Error::Dictionary(format!("{}: {}", filename, e)))?;
        Dictionary::from_toml_str(content)
    }

    /// Loads `uk.toml` and `en.toml` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |locale: Locale| -> Result<Dictionary> {
            let path = dir.join(format!("{}.toml", locale.code()));
            let content = fs::read_to_string(&path)?;
            Dictionary::from_toml_str(&content)
                .map_err(|e| Error::Dictionary(format!("{}: {}", path.display(), e)))
        };
        Ok(Self {
            uk: read(Locale::Uk)?,
            en: read(Locale::En)?,
        })
    }

    /// Empty dictionaries: every key resolves to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: Locale) -> &Dictionary {
        match locale {
            Locale::Uk => &self.uk,
            Locale::En => &self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
        [header]
        title = "Centre"

        [header.nav]
        home = "Home"

        [initiatives.thinkTanks]
        tags = ["a", "b"]
    "#;

    #[test]
    fn lookup_walks_nested_tables() {
        let dict = Dictionary::from_toml_str(SAMPLE).unwrap();
        assert_eq!(dict.text("header.nav.home"), Some("Home"));
        assert_eq!(dict.text("header.title"), Some("Centre"));
    }

    #[test]
    fn missing_segments_yield_none() {
        let dict = Dictionary::from_toml_str(SAMPLE).unwrap();
        assert_eq!(dict.text("header.nav.missing"), None);
        assert_eq!(dict.text("nothing.here"), None);
        assert_eq!(dict.text("header.title.deeper"), None);
        assert_eq!(dict.text(""), None);
    }

    #[test]
    fn tables_and_lists_are_not_text() {
        let dict = Dictionary::from_toml_str(SAMPLE).unwrap();
        assert_eq!(dict.text("header.nav"), None);
        assert_eq!(dict.text("initiatives.thinkTanks.tags"), None);
        assert_eq!(
            dict.list("initiatives.thinkTanks.tags"),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(dict.list("header.title"), None);
    }

    #[test]
    fn leaf_paths_lists_every_leaf() {
        let dict = Dictionary::from_toml_str(SAMPLE).unwrap();
        assert_eq!(
            dict.leaf_paths(),
            vec![
                "header.nav.home".to_string(),
                "header.title".to_string(),
                "initiatives.thinkTanks.tags".to_string(),
            ]
        );
    }

    #[test]
    fn invalid_toml_is_a_dictionary_error() {
        let result = Dictionary::from_toml_str("[unterminated");
        assert!(matches!(result, Err(Error::Dictionary(_))));
    }

    #[test]
    fn numeric_leaves_are_rejected() {
        assert!(Dictionary::from_toml_str("count = 3").is_err());
    }

    #[test]
    fn embedded_dictionaries_load() {
        let dictionaries = Dictionaries::embedded().expect("embedded dictionaries");
        assert_eq!(
            dictionaries.get(Locale::Uk).text("header.nav.home"),
            Some("Головна")
        );
        assert_eq!(
            dictionaries.get(Locale::En).text("header.nav.home"),
            Some("Home")
        );
    }

    #[test]
    fn embedded_dictionaries_share_leaf_paths() {
        let dictionaries = Dictionaries::embedded().expect("embedded dictionaries");
        let uk: BTreeSet<_> = dictionaries.get(Locale::Uk).leaf_paths().into_iter().collect();
        let en: BTreeSet<_> = dictionaries.get(Locale::En).leaf_paths().into_iter().collect();
        let only_uk: Vec<_> = uk.difference(&en).collect();
        let only_en: Vec<_> = en.difference(&uk).collect();
        assert!(only_uk.is_empty(), "missing in en: {:?}", only_uk);
        assert!(only_en.is_empty(), "missing in uk: {:?}", only_en);
    }

    #[test]
    fn from_dir_reads_both_files() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("uk.toml"), "greeting = \"Привіт\"").unwrap();
        fs::write(dir.path().join("en.toml"), "greeting = \"Hello\"").unwrap();

        let dictionaries = Dictionaries::from_dir(dir.path()).expect("load dir");
        assert_eq!(dictionaries.get(Locale::Uk).text("greeting"), Some("Привіт"));
        assert_eq!(dictionaries.get(Locale::En).text("greeting"), Some("Hello"));
    }

    #[test]
    fn from_dir_missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("uk.toml"), "greeting = \"Привіт\"").unwrap();
        assert!(matches!(
            Dictionaries::from_dir(dir.path()),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn empty_dictionaries_have_no_entries() {
        let dictionaries = Dictionaries::empty();
        assert!(dictionaries.get(Locale::Uk).is_empty());
        assert!(dictionaries.get(Locale::En).is_empty());
    }
}
