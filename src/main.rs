use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tx_cli::cli::commands::{languages, session};
use tx_cli::cli::{Args, Command};
use tx_cli::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may live in a .env file in the working directory
    let _ = dotenvy::dotenv();

    if let Err(err) = run().await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Languages) => {
            languages::run_languages(args.endpoint).await?;
        }
        None => {
            let options = session::SessionOptions {
                to: args.to,
                key: args.key,
                region: args.region,
                endpoint: args.endpoint,
            };
            session::run_session(options).await?;
        }
    }

    Ok(())
}
