//! The abstract translation service and its response model.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use super::catalog::LanguageCatalog;

/// One translated text for one requested target language.
#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    /// The target language code this text was translated into.
    pub to: String,
    /// The translated text.
    pub text: String,
}

/// The source language the service inferred from the input text.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectedLanguage {
    pub language: String,
    pub score: f64,
}

/// The translation of one input text: the detected source language and one
/// translated entry per requested target code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// Absent when the caller pinned the source language explicitly.
    #[serde(default)]
    pub detected_language: Option<DetectedLanguage>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl TranslationResult {
    /// The detected source language code, or "unknown" if the service did not
    /// report one.
    pub fn detected_code(&self) -> &str {
        self.detected_language
            .as_ref()
            .map_or("unknown", |detected| detected.language.as_str())
    }
}

/// A remote machine-translation service.
///
/// The session logic depends only on this trait so tests can substitute an
/// in-memory implementation for the real HTTP client.
#[async_trait]
pub trait TranslationService {
    /// Fetches the catalog of languages the service can translate into.
    async fn supported_languages(&self) -> Result<LanguageCatalog>;

    /// Translates each text into each target language, returning one result
    /// per input text.
    async fn translate(&self, texts: &[&str], to: &[&str]) -> Result<Vec<TranslationResult>>;
}

// Allow passing a service by reference wherever an owned one is expected.
#[async_trait]
impl<S: TranslationService + Sync + ?Sized> TranslationService for &S {
    async fn supported_languages(&self) -> Result<LanguageCatalog> {
        (**self).supported_languages().await
    }

    async fn translate(&self, texts: &[&str], to: &[&str]) -> Result<Vec<TranslationResult>> {
        (**self).translate(texts, to).await
    }
}
