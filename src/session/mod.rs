//! The interactive session: pick a target language once, then translate
//! lines of input until the user quits.

mod run;
mod select;

pub use run::translate_loop;
pub use select::choose_target;

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::translation::TranslationService;
use crate::ui::Spinner;

/// One interactive translation session over a pair of I/O streams.
///
/// Generic over the service and the streams so tests can drive it with a mock
/// service and in-memory buffers.
pub struct Session<S> {
    service: S,
    preset_target: Option<String>,
}

impl<S: TranslationService> Session<S> {
    /// Creates a session. A preset target (from `--to` or the config file)
    /// skips the language prompt if it turns out to be valid.
    pub const fn new(service: S, preset_target: Option<String>) -> Self {
        Self {
            service,
            preset_target,
        }
    }

    /// Runs the session to completion: fetch the catalog, choose a target
    /// language, then translate until the quit sentinel or end of input.
    pub async fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        let spinner = Spinner::new("Fetching supported languages...");
        let catalog = self.service.supported_languages().await;
        spinner.stop();
        let catalog = catalog?;

        let target = choose_target(&catalog, self.preset_target.as_deref(), input, output)?;

        translate_loop(&self.service, &target, input, output).await
    }
}

/// Reads one line, stripping the trailing newline. `None` means the input
/// stream is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes_read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;

    if bytes_read == 0 {
        return Ok(None);
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(Some(line))
}
