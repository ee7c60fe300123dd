//! Target language selection.

use anyhow::Result;
use std::io::{BufRead, Write};

use super::read_line;
use crate::translation::LanguageCatalog;

const LANGUAGE_SUPPORT_URL: &str =
    "https://learn.microsoft.com/azure/ai-services/translator/language-support#translation";

/// Prompts until the user enters a language code present in `catalog`.
///
/// A valid `preset` code is returned without prompting at all. Invalid input
/// (including an invalid preset and empty lines) gets one rejection line per
/// attempt; there is no attempt limit. End of input before a valid selection
/// is an error.
pub fn choose_target<R: BufRead, W: Write>(
    catalog: &LanguageCatalog,
    preset: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    if let Some(code) = preset
        && catalog.contains(code)
    {
        return Ok(code.to_string());
    }

    writeln!(output, "{} languages supported.", catalog.len())?;
    writeln!(output, "(See {LANGUAGE_SUPPORT_URL})")?;
    writeln!(
        output,
        "Enter a target language code for translation (for example, 'en'):"
    )?;

    if let Some(code) = preset {
        writeln!(output, "{code} is not a supported language.")?;
    }

    loop {
        let Some(code) = read_line(input)? else {
            anyhow::bail!("Input ended before a target language was chosen");
        };

        if catalog.contains(&code) {
            return Ok(code);
        }

        writeln!(output, "{code} is not a supported language.")?;
    }
}
