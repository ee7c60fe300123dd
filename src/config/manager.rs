use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::DEFAULT_ENDPOINT;

/// Environment variable holding the Translator API key.
pub const KEY_ENV_VAR: &str = "TRANSLATOR_KEY";
/// Environment variable holding the Translator resource region.
pub const REGION_ENV_VAR: &str = "TRANSLATOR_REGION";
/// Environment variable overriding the service endpoint.
pub const ENDPOINT_ENV_VAR: &str = "TRANSLATOR_ENDPOINT";

/// Settings in the `[translator]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Translator API key.
    pub key: Option<String>,
    /// Region of the Translator resource (e.g., "westeurope").
    pub region: Option<String>,
    /// Service endpoint URL; the global endpoint if unset.
    pub endpoint: Option<String>,
    /// Default target language code.
    pub to: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tx/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub translator: TranslatorConfig,
}

/// Resolved configuration after merging CLI arguments, environment variables
/// and the config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The Translator API key.
    pub key: String,
    /// The resource region.
    pub region: String,
    /// The service endpoint URL.
    pub endpoint: String,
    /// Preset target language, if any; the session prompts when `None`.
    pub to: Option<String>,
}

/// CLI overrides that take precedence over environment and config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub to: Option<String>,
    pub key: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options, environment variables and
/// config file settings, in that priority order.
///
/// # Errors
///
/// Returns an error if the API key or region cannot be found anywhere.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let key = options
        .key
        .clone()
        .or_else(|| env_var(KEY_ENV_VAR))
        .or_else(|| config_file.translator.key.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'key' (Translator API key)\n\n\
                 Please provide it via:\n  \
                 - CLI option: tx --key <key>\n  \
                 - Environment: export {KEY_ENV_VAR}=\"your-api-key\"\n  \
                 - Config file: ~/.config/tx/config.toml"
            )
        })?;

    let region = options
        .region
        .clone()
        .or_else(|| env_var(REGION_ENV_VAR))
        .or_else(|| config_file.translator.region.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'region' (Translator resource region)\n\n\
                 Please provide it via:\n  \
                 - CLI option: tx --region <region>\n  \
                 - Environment: export {REGION_ENV_VAR}=\"westeurope\"\n  \
                 - Config file: ~/.config/tx/config.toml"
            )
        })?;

    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| env_var(ENDPOINT_ENV_VAR))
        .or_else(|| config_file.translator.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let to = options.to.clone().or_else(|| config_file.translator.to.clone());

    Ok(ResolvedConfig {
        key,
        region,
        endpoint,
        to,
    })
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/tx/config.toml`
    /// or `~/.config/tx/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    fn create_test_options() -> ResolveOptions {
        ResolveOptions {
            to: Some("fr".to_string()),
            key: Some("cli-key".to_string()),
            region: Some("westeurope".to_string()),
            endpoint: None,
        }
    }

    fn create_test_config() -> ConfigFile {
        ConfigFile {
            translator: TranslatorConfig {
                key: Some("file-key".to_string()),
                region: Some("eastus".to_string()),
                endpoint: None,
                to: Some("ja".to_string()),
            },
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = create_test_config();
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.translator.key, Some("file-key".to_string()));
        assert_eq!(loaded.translator.region, Some("eastus".to_string()));
        assert_eq!(loaded.translator.to, Some("ja".to_string()));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = manager.load_or_default();
        assert!(config.translator.key.is_none());
    }

    #[test]
    #[serial]
    fn test_resolve_config_with_cli_options() {
        let resolved = resolve_config(&create_test_options(), &create_test_config()).unwrap();

        assert_eq!(resolved.key, "cli-key");
        assert_eq!(resolved.region, "westeurope");
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.to, Some("fr".to_string()));
    }

    #[test]
    #[serial]
    fn test_resolve_config_falls_back_to_file() {
        let resolved = resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();

        assert_eq!(resolved.key, "file-key");
        assert_eq!(resolved.region, "eastus");
        assert_eq!(resolved.to, Some("ja".to_string()));
    }

    #[test]
    #[serial]
    fn test_resolve_config_env_overrides_file() {
        // SAFETY: serialized with other env-sensitive tests
        unsafe {
            std::env::set_var(KEY_ENV_VAR, "env-key");
            std::env::set_var(REGION_ENV_VAR, "env-region");
        }

        let resolved = resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();

        assert_eq!(resolved.key, "env-key");
        assert_eq!(resolved.region, "env-region");

        unsafe {
            std::env::remove_var(KEY_ENV_VAR);
            std::env::remove_var(REGION_ENV_VAR);
        }
    }

    #[test]
    #[serial]
    fn test_resolve_config_cli_overrides_env() {
        // SAFETY: serialized with other env-sensitive tests
        unsafe {
            std::env::set_var(KEY_ENV_VAR, "env-key");
        }

        let resolved = resolve_config(&create_test_options(), &ConfigFile::default()).unwrap();
        assert_eq!(resolved.key, "cli-key");

        unsafe {
            std::env::remove_var(KEY_ENV_VAR);
        }
    }

    #[test]
    #[serial]
    fn test_resolve_config_missing_key() {
        let mut config = create_test_config();
        config.translator.key = None;

        let result = resolve_config(&ResolveOptions::default(), &config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("key"));
    }

    #[test]
    #[serial]
    fn test_resolve_config_missing_region() {
        let mut config = create_test_config();
        config.translator.region = None;

        let result = resolve_config(&ResolveOptions::default(), &config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("region"));
    }

    #[test]
    #[serial]
    fn test_resolve_config_custom_endpoint() {
        let mut options = create_test_options();
        options.endpoint = Some("https://my-endpoint.example.com".to_string());

        let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();
        assert_eq!(resolved.endpoint, "https://my-endpoint.example.com");
    }

    #[test]
    #[serial]
    fn test_resolve_config_empty_env_var_is_ignored() {
        // SAFETY: serialized with other env-sensitive tests
        unsafe {
            std::env::set_var(KEY_ENV_VAR, "");
        }

        let resolved = resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();
        assert_eq!(resolved.key, "file-key");

        unsafe {
            std::env::remove_var(KEY_ENV_VAR);
        }
    }
}
