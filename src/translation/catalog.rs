//! The supported-language catalog.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Display metadata for a single supported language.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Display name in the catalog's locale (e.g., "French").
    pub name: String,
    /// Display name in the language itself (e.g., "Français").
    pub native_name: String,
    /// Writing direction, "ltr" or "rtl".
    pub dir: String,
}

/// The languages the service can translate into, keyed by language code.
///
/// Fetched once per session and read-only thereafter. Codes are kept in a
/// `BTreeMap` so listings come out in a stable order.
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
    languages: BTreeMap<String, Language>,
}

impl LanguageCatalog {
    pub const fn new(languages: BTreeMap<String, Language>) -> Self {
        Self { languages }
    }

    /// Number of supported languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Returns `true` if `code` is a valid target language.
    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages.get(code)
    }

    /// Iterates over (code, language) pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Language)> {
        self.languages.iter().map(|(code, lang)| (code.as_str(), lang))
    }
}

impl FromIterator<(String, Language)> for LanguageCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Language)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
