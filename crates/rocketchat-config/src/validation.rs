//! Full configuration validation.
//!
//! Collects every problem into a single `ConfigError` instead of stopping
//! at the first one.

use crate::schema::RocketChatConfig;
use rocketchat_common::ConfigError;

const PROTOCOLS: &[&str] = &["http", "https"];
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RocketChatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Server
    if !PROTOCOLS.contains(&config.server.protocol.as_str()) {
        errors.push(format!(
            "server.protocol = {:?} must be one of {PROTOCOLS:?}",
            config.server.protocol
        ));
    }
    if config.server.host.trim().is_empty() {
        errors.push("server.host must not be empty".into());
    }
    validate_range(&mut errors, "server.port", u32::from(config.server.port), 1, 65535);

    // HTTP timeouts
    validate_range(
        &mut errors,
        "http.connect_timeout_secs",
        config.http.connect_timeout_secs,
        1,
        600,
    );
    validate_range(&mut errors, "http.timeout_secs", config.http.timeout_secs, 1, 600);

    // Logging
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {LOG_LEVELS:?}",
            config.logging.level
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
