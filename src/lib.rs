//! # tx - Interactive Translation CLI
//!
//! `tx` is a command-line client for the Azure AI Translator service.
//! It fetches the set of languages the service can translate into, lets you
//! pick one, and then translates whatever you type until you say `quit`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start an interactive session
//! tx
//!
//! # Skip the language prompt
//! tx --to fr
//!
//! # List every language the service supports
//! tx languages
//! ```
//!
//! ## Configuration
//!
//! The Translator API key and resource region come from CLI options,
//! the `TRANSLATOR_KEY` / `TRANSLATOR_REGION` environment variables
//! (a `.env` file in the working directory is honored), or
//! `~/.config/tx/config.toml`:
//!
//! ```toml
//! [translator]
//! key = "your-api-key"
//! region = "westeurope"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and credential resolution.
pub mod config;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The interactive session: language selection and the translation loop.
pub mod session;

/// Translation service abstraction and the Azure Translator client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
