use anyhow::Result;
use std::io;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::session::Session;
use crate::translation::AzureTranslatorClient;

pub struct SessionOptions {
    pub to: Option<String>,
    pub key: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

/// Runs the interactive translation session on stdin/stdout.
pub async fn run_session(options: SessionOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let file_config = manager.load_or_default();

    let resolve_options = ResolveOptions {
        to: options.to,
        key: options.key,
        region: options.region,
        endpoint: options.endpoint,
    };
    let resolved = resolve_config(&resolve_options, &file_config)?;

    let client = AzureTranslatorClient::new(resolved.endpoint, resolved.key, resolved.region);
    let session = Session::new(client, resolved.to);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    session.run(&mut input, &mut output).await
}
