use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::{Language, LanguageCatalog};
use super::service::{TranslationResult, TranslationService};

/// The global Translator endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";

const API_VERSION: &str = "3.0";

#[derive(Debug, Serialize)]
struct InputTextItem<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    #[serde(default)]
    translation: BTreeMap<String, Language>,
}

/// HTTP client for the Azure AI Translator REST API (v3.0).
///
/// Every call is a single request: failures are reported to the caller as-is,
/// never retried.
pub struct AzureTranslatorClient {
    http: Client,
    endpoint: String,
    key: String,
    region: String,
}

impl AzureTranslatorClient {
    pub fn new(endpoint: String, key: String, region: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            key,
            region,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl TranslationService for AzureTranslatorClient {
    async fn supported_languages(&self) -> Result<LanguageCatalog> {
        let url = self.url("languages");

        // The languages endpoint takes no credentials; "translation" scope
        // restricts the response to translation-capable languages.
        let response = self
            .http
            .get(&url)
            .query(&[("api-version", API_VERSION), ("scope", "translation")])
            .send()
            .await
            .with_context(|| format!("Failed to connect to translator endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Languages request failed with status {status}: {body}");
        }

        let languages: LanguagesResponse = response
            .json()
            .await
            .context("Failed to parse languages response")?;

        Ok(LanguageCatalog::new(languages.translation))
    }

    async fn translate(&self, texts: &[&str], to: &[&str]) -> Result<Vec<TranslationResult>> {
        let url = self.url("translate");

        let mut query: Vec<(&str, &str)> = vec![("api-version", API_VERSION)];
        query.extend(to.iter().map(|code| ("to", *code)));

        let body: Vec<InputTextItem> = texts.iter().map(|text| InputTextItem { text }).collect();

        let response = self
            .http
            .post(&url)
            .query(&query)
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .header("Ocp-Apim-Subscription-Region", &self.region)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to connect to translator endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translate request failed with status {status}: {body}");
        }

        response
            .json()
            .await
            .context("Failed to parse translate response")
    }
}
