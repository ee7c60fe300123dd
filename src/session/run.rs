//! The translation loop.

use anyhow::Result;
use std::io::{BufRead, Write};

use super::read_line;
use crate::translation::TranslationService;
use crate::ui::Spinner;

/// The input that ends the loop, matched case-insensitively.
const QUIT_SENTINEL: &str = "quit";

/// Reads lines and translates each one into `target` until the quit sentinel
/// or end of input.
///
/// An empty translate response is skipped silently; the loop continues.
/// Errors from the service are not handled here, they end the session.
pub async fn translate_loop<S, R, W>(
    service: &S,
    target: &str,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    S: TranslationService,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "Enter text to translate (or 'quit' to exit): ")?;
        output.flush()?;

        let Some(text) = read_line(input)? else {
            break;
        };

        if text.eq_ignore_ascii_case(QUIT_SENTINEL) {
            break;
        }

        let spinner = Spinner::new("Translating...");
        let results = service.translate(&[text.as_str()], &[target]).await;
        spinner.stop();

        // Exactly one result is expected since exactly one text was sent;
        // an empty response is skipped without complaint.
        let results = results?;
        let Some(result) = results.first() else {
            continue;
        };

        let detected = result.detected_code();
        for translation in &result.translations {
            writeln!(
                output,
                "'{text}' was translated from {detected} to {} as '{}'.",
                translation.to, translation.text
            )?;
        }
    }

    Ok(())
}
