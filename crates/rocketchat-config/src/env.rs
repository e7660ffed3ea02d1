//! Environment variable overrides.
//!
//! Applied after the TOML file is loaded so deployments can inject
//! credentials without writing them to disk.

use crate::schema::RocketChatConfig;
use rocketchat_common::ConfigError;
use tracing::debug;

pub const ENV_PROTOCOL: &str = "ROCKETCHAT_PROTOCOL";
pub const ENV_HOST: &str = "ROCKETCHAT_HOST";
pub const ENV_PORT: &str = "ROCKETCHAT_PORT";
pub const ENV_USER: &str = "ROCKETCHAT_USER";
pub const ENV_PASSWORD: &str = "ROCKETCHAT_PASSWORD";

/// Apply `ROCKETCHAT_*` variables from the process environment.
pub fn apply_env_overrides(config: &mut RocketChatConfig) -> Result<(), ConfigError> {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides using an arbitrary variable lookup.
pub fn apply_overrides_from<F>(config: &mut RocketChatConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(protocol) = lookup(ENV_PROTOCOL) {
        debug!("{ENV_PROTOCOL} override applied");
        config.server.protocol = protocol;
    }
    if let Some(host) = lookup(ENV_HOST) {
        debug!("{ENV_HOST} override applied");
        config.server.host = host;
    }
    if let Some(port) = lookup(ENV_PORT) {
        config.server.port = port.trim().parse().map_err(|e| {
            ConfigError::ParseError(format!("{ENV_PORT} = {port:?} is not a valid port: {e}"))
        })?;
        debug!("{ENV_PORT} override applied");
    }
    if let Some(user) = lookup(ENV_USER) {
        debug!("{ENV_USER} override applied");
        config.credentials.username = user;
    }
    if let Some(password) = lookup(ENV_PASSWORD) {
        debug!("{ENV_PASSWORD} override applied");
        config.credentials.password = password;
    }
    Ok(())
}
