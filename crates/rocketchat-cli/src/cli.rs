use clap::{Parser, Subcommand};

/// Command-line client for a Rocket.Chat server.
#[derive(Parser, Debug)]
#[command(name = "rocketchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Server host override.
    #[arg(long)]
    pub host: Option<String>,

    /// Server port override.
    #[arg(long)]
    pub port: Option<u16>,

    /// Server protocol override (http, https).
    #[arg(long)]
    pub protocol: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Log in and print the session's user id.
    Login,
    /// Log in, then log out again.
    Logout,
    /// Print the server's API version.
    Version,
    /// List public channels.
    Rooms,
    /// Create a channel.
    CreateRoom { name: String },
    /// Join a channel by room id.
    Join { room_id: String },
    /// Leave a channel by room id.
    Leave { room_id: String },
    /// Post a message to a room.
    Send { room_id: String, message: String },
    /// Fetch the unread messages of a room.
    Unread { room_id: String },
    /// Print the effective configuration.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}
