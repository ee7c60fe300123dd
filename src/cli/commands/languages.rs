use anyhow::Result;

use crate::config::ENDPOINT_ENV_VAR;
use crate::translation::{AzureTranslatorClient, DEFAULT_ENDPOINT, TranslationService};
use crate::ui::{Spinner, Style};

/// Fetches and prints the supported-language catalog.
///
/// The languages endpoint is unauthenticated, so this works without a key or
/// region configured.
pub async fn run_languages(endpoint: Option<String>) -> Result<()> {
    let endpoint = endpoint
        .or_else(|| std::env::var(ENDPOINT_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let client = AzureTranslatorClient::new(endpoint, String::new(), String::new());

    let spinner = Spinner::new("Fetching supported languages...");
    let catalog = client.supported_languages().await;
    spinner.stop();
    let catalog = catalog?;

    println!(
        "{}",
        Style::header(format!("{} languages supported", catalog.len()))
    );
    for (code, language) in catalog.iter() {
        println!(
            "  {:8} {} {}",
            Style::code(code),
            language.name,
            Style::secondary(format!("({})", language.native_name))
        );
    }

    Ok(())
}
