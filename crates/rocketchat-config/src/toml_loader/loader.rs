//! Reading a config file into [`RocketChatConfig`].

use crate::schema::RocketChatConfig;
use crate::validation;
use rocketchat_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse the TOML file at `path`. Missing fields take their defaults.
///
/// Invalid values are only warned about here; strict checking is left to
/// the caller so later overrides can still fix them.
pub fn load_from_path(path: &Path) -> Result<RocketChatConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )))
        }
    };

    let config: RocketChatConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}");
    }
    debug!(path = %path.display(), "Config loaded");
    Ok(config)
}

/// Load `path`, writing the default template there first if it is missing.
pub fn load_or_create(path: &Path) -> Result<RocketChatConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            warn!(path = %path.display(), "No config file, using defaults");
            create_default_config(path)?;
            Ok(RocketChatConfig::default())
        }
        other => other,
    }
}

/// [`load_or_create`] at [`default_config_path`].
pub fn load_default() -> Result<RocketChatConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
