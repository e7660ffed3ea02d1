//! Rocket.Chat REST client.
//!
//! Provides an authenticated client for the Rocket.Chat REST API with:
//! - A session manager owning the login token pair
//! - A dispatcher that logs in on demand before any call is sent
//! - Uniform classification of transport and HTTP outcomes
//! - Room and message operations built on top of the dispatcher
//!
//! ```rust,no_run
//! use rocketchat_client::{ClientConfig, RocketChatApi};
//!
//! # async fn run() -> Result<(), rocketchat_client::ClientError> {
//! let config = ClientConfig::new("bot", "secret").with_host("chat.example.org");
//! let api = RocketChatApi::new(config)?;
//! let rooms = api.get_public_rooms().await?;
//! println!("{rooms}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod dispatcher;
pub mod session;
pub mod stats;
pub mod target;
pub mod transport;

pub use api::{RocketChatApi, VersionInfo, Versions};
pub use config::ClientConfig;
pub use dispatcher::{Dispatcher, Operation};
pub use session::{Credentials, Session, SessionManager};
pub use stats::{RequestStats, StatsSnapshot};
pub use target::EndpointTarget;
pub use transport::{
    CallDescriptor, HttpTransport, Payload, RawResponse, ReqwestTransport, TransportError,
};

/// Result shape returned by every public client operation.
pub type Outcome<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{status}: {message}")]
    UnexpectedStatus { status: u16, message: String },
    #[error("Response body was undefined.")]
    EmptyBody,
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl ClientError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::NotFound(_) => Some(404),
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ClientError> for rocketchat_common::RocketChatError {
    fn from(err: ClientError) -> Self {
        rocketchat_common::RocketChatError::Client(err.to_string())
    }
}
