mod manager;

pub use manager::{
    ConfigFile, ConfigManager, ENDPOINT_ENV_VAR, KEY_ENV_VAR, REGION_ENV_VAR, ResolveOptions,
    ResolvedConfig, TranslatorConfig, resolve_config,
};
