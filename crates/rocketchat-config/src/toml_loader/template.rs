//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Rocket.Chat client configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# ROCKETCHAT_PROTOCOL, ROCKETCHAT_HOST, ROCKETCHAT_PORT, ROCKETCHAT_USER and
# ROCKETCHAT_PASSWORD take precedence over this file.

[server]
protocol = "http"        # http, https
host = "demo.rocket.chat"
port = 80

[credentials]
# username = ""
# password = ""

[http]
# connect_timeout_secs = 10   # 1-600
# timeout_secs = 30           # 1-600

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
