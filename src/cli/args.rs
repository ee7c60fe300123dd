use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tx")]
#[command(about = "Interactive translation CLI for the Azure AI Translator service")]
#[command(version)]
pub struct Args {
    /// Target language code (e.g., en, fr, ja); prompts interactively if omitted
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translator API key (overrides config file and TRANSLATOR_KEY)
    #[arg(short = 'k', long)]
    pub key: Option<String>,

    /// Region of the Translator resource (overrides config file and TRANSLATOR_REGION)
    #[arg(short = 'r', long)]
    pub region: Option<String>,

    /// Translator API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the languages the service can translate into
    Languages,
}
