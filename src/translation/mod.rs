mod catalog;
mod client;
mod service;

pub use catalog::{Language, LanguageCatalog};
pub use client::{AzureTranslatorClient, DEFAULT_ENDPOINT};
pub use service::{DetectedLanguage, Translation, TranslationResult, TranslationService};
