//! Public client surface.
//!
//! `RocketChatApi` wires a [`SessionManager`] and a [`Dispatcher`] over one
//! transport. Every endpoint builds a [`CallDescriptor`] and hands it to the
//! dispatcher, which logs in on demand.

mod messages;
mod rooms;
mod types;


use std::sync::Arc;

use rocketchat_common::SessionEvent;
use tokio::sync::broadcast;

use crate::config::ClientConfig;
use crate::dispatcher::{Dispatcher, Operation};
use crate::session::{Credentials, Session, SessionManager};
use crate::stats::RequestStats;
use crate::target::EndpointTarget;
use crate::transport::{CallDescriptor, HttpTransport, ReqwestTransport};
use crate::{ClientError, Outcome};

pub use types::{VersionInfo, Versions};

use types::InfoResponse;

const VERSION: Operation = Operation {
    name: "version",
    not_found: "get version failed",
    unexpected: "Unable to connect to rocket chat during getting version.",
};

/// Authenticated Rocket.Chat REST client.
pub struct RocketChatApi {
    target: EndpointTarget,
    sessions: Arc<SessionManager>,
    dispatcher: Dispatcher,
    stats: Arc<RequestStats>,
}

impl RocketChatApi {
    /// Build a client over a reqwest transport.
    pub fn new(config: ClientConfig) -> Outcome<Self> {
        let transport = ReqwestTransport::new(config.connect_timeout, config.timeout)?;
        Ok(Self::with_transport(
            config.target,
            config.credentials,
            Arc::new(transport),
        ))
    }

    /// Build a client over any transport.
    pub fn with_transport(
        target: EndpointTarget,
        credentials: Credentials,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let stats = Arc::new(RequestStats::new());
        let sessions = Arc::new(SessionManager::new(
            credentials,
            target.clone(),
            Arc::clone(&transport),
            Arc::clone(&stats),
        ));
        let dispatcher = Dispatcher::new(Arc::clone(&sessions), transport, Arc::clone(&stats));
        Self {
            target,
            sessions,
            dispatcher,
            stats,
        }
    }

    /// Log in explicitly. Other operations do this on demand.
    pub async fn login(&self) -> Outcome<Session> {
        self.sessions.login().await
    }

    /// Log out and forget the session.
    pub async fn logout(&self) -> Outcome<serde_json::Value> {
        self.sessions.logout().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.sessions.is_authenticated().await
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.sessions.current_session().await
    }

    /// Server version, reshaped into a status + versions envelope.
    pub async fn version(&self) -> Outcome<VersionInfo> {
        let call = CallDescriptor::get(self.target.make_uri("info"));
        let body = self.dispatcher.call(call, &VERSION).await?;

        let info: InfoResponse = serde_json::from_value(body)
            .map_err(|e| ClientError::MalformedBody(format!("info response: {e}")))?;
        Ok(VersionInfo::from(info))
    }

    /// Subscribe to login/logout notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sessions.subscribe()
    }

    pub fn stats(&self) -> &RequestStats {
        &self.stats
    }

    pub fn target(&self) -> &EndpointTarget {
        &self.target
    }
}
