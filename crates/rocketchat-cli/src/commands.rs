//! Subcommand execution against the client.

use std::path::Path;
use std::time::Duration;

use rocketchat_client::{ClientConfig, ClientError, RocketChatApi};
use rocketchat_common::ConfigError;
use rocketchat_config::RocketChatConfig;
use serde_json::json;

use crate::cli::{Args, Command};

/// File, then `ROCKETCHAT_*` env, then command-line flags.
///
/// Nothing is validated here, so a flag can still repair a bad file value.
pub fn effective_config(args: &Args) -> Result<RocketChatConfig, ConfigError> {
    let mut config = rocketchat_config::load_unvalidated(args.config.as_deref().map(Path::new))?;
    apply_overrides(&mut config, args);
    Ok(config)
}

/// Apply `--protocol/--host/--port` on top of the loaded config.
pub fn apply_overrides(config: &mut RocketChatConfig, args: &Args) {
    if let Some(ref protocol) = args.protocol {
        config.server.protocol = protocol.clone();
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
}

pub fn client_config(config: &RocketChatConfig) -> ClientConfig {
    ClientConfig::new(
        config.credentials.username.clone(),
        config.credentials.password.clone(),
    )
    .with_protocol(config.server.protocol.clone())
    .with_host(config.server.host.clone())
    .with_port(config.server.port)
    .with_timeouts(
        Duration::from_secs(u64::from(config.http.connect_timeout_secs)),
        Duration::from_secs(u64::from(config.http.timeout_secs)),
    )
}

/// Run one subcommand and return the JSON to print.
pub async fn run(api: &RocketChatApi, command: &Command) -> Result<serde_json::Value, ClientError> {
    match command {
        Command::Login => {
            let session = api.login().await?;
            Ok(json!({ "status": "success", "userId": session.user_id }))
        }
        Command::Logout => {
            api.login().await?;
            api.logout().await
        }
        Command::Version => {
            let version = api.version().await?;
            serde_json::to_value(version).map_err(|e| ClientError::MalformedBody(e.to_string()))
        }
        Command::Rooms => api.get_public_rooms().await,
        Command::CreateRoom { name } => api.create_room(name).await,
        Command::Join { room_id } => api.join_room(room_id).await,
        Command::Leave { room_id } => api.leave_room(room_id).await,
        Command::Send { room_id, message } => api.send_msg(room_id, message).await,
        Command::Unread { room_id } => api.get_unread_msg(room_id).await,
        // Handled before a client is built.
        Command::Config => Ok(serde_json::Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_overrides_win_over_config() {
        let args = Args::try_parse_from([
            "rocketchat",
            "--protocol",
            "https",
            "--host",
            "chat.example.org",
            "--port",
            "8443",
            "rooms",
        ])
        .unwrap();
        let mut config = RocketChatConfig::default();
        apply_overrides(&mut config, &args);

        assert_eq!(config.server.protocol, "https");
        assert_eq!(config.server.host, "chat.example.org");
        assert_eq!(config.server.port, 8443);
    }

    #[test]
    fn flag_repairs_invalid_protocol_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nprotocol = \"gopher\"\nhost = \"chat.example.org\"\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let args = Args::try_parse_from(["rocketchat", "--config", path.as_str(), "--protocol", "https", "rooms"])
            .unwrap();
        let config = effective_config(&args).unwrap();

        assert_eq!(config.server.protocol, "https");
        assert!(rocketchat_config::validation::validate(&config).is_ok());
    }

    #[test]
    fn invalid_file_value_without_flag_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nprotocol = \"gopher\"\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let args = Args::try_parse_from(["rocketchat", "--config", path.as_str(), "rooms"]).unwrap();
        let config = effective_config(&args).unwrap();

        assert!(matches!(
            rocketchat_config::validation::validate(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn client_config_maps_all_fields() {
        let mut config = RocketChatConfig::default();
        config.server.host = "chat.example.org".into();
        config.credentials.username = "bot".into();
        config.credentials.password = "secret".into();
        config.http.timeout_secs = 5;

        let client = client_config(&config);
        assert_eq!(
            client.target.make_uri("info"),
            "http://chat.example.org:80/api/info"
        );
        assert_eq!(client.credentials.username, "bot");
        assert_eq!(client.credentials.password, "secret");
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(client.connect_timeout, Duration::from_secs(10));
    }
}
