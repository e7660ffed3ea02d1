//! Rocket.Chat client configuration.
//!
//! TOML-based configuration with environment overrides and validation.
//! All config sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rocketchat_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::apply_env_overrides;
pub use schema::{
    CredentialsConfig, HttpConfig, LoggingConfig, RocketChatConfig, ServerConfig,
    CONFIG_SCHEMA_VERSION,
};

use rocketchat_common::ConfigError;
use std::path::Path;

/// Load the effective configuration.
///
/// Reads `path` when given, otherwise the platform default (creating it on
/// first run), then applies `ROCKETCHAT_*` environment overrides and
/// validates the result.
pub fn load_config(path: Option<&Path>) -> Result<RocketChatConfig, ConfigError> {
    let config = load_unvalidated(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Like [`load_config`] but without the final validation, for callers that
/// layer further overrides on top and validate afterwards.
pub fn load_unvalidated(path: Option<&Path>) -> Result<RocketChatConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    env::apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string with the password masked.
pub fn config_to_json(config: &RocketChatConfig) -> String {
    let mut masked = config.clone();
    if !masked.credentials.password.is_empty() {
        masked.credentials.password = "[REDACTED]".into();
    }
    serde_json::to_string_pretty(&masked)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
