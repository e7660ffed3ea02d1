//! SessionManager: owns the single login session of a client.

use std::sync::Arc;

use rocketchat_common::{SessionEvent, SessionEventBus};
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

use crate::dispatcher::{classify, Operation};
use crate::stats::RequestStats;
use crate::target::EndpointTarget;
use crate::transport::{CallDescriptor, HttpTransport};
use crate::{ClientError, Outcome};

use super::types::{Credentials, LoginResponse, Session};

const LOGIN_PATH: &str = "v1/login";
const LOGOUT_PATH: &str = "v1/logout";

const LOGOUT: Operation = Operation {
    name: "logout",
    not_found: "logout failed",
    unexpected: "Unable to connect to rocket chat during logout.",
};

/// Holds the current [`Session`] (or none) and performs the login and
/// logout exchanges.
///
/// The stored session is only ever replaced by a complete token pair from a
/// successful login, and only cleared by a successful logout or an
/// explicit [`invalidate`](Self::invalidate).
pub struct SessionManager {
    credentials: Credentials,
    target: EndpointTarget,
    transport: Arc<dyn HttpTransport>,
    session: RwLock<Option<Session>>,
    events: SessionEventBus,
    stats: Arc<RequestStats>,
}

impl SessionManager {
    pub fn new(
        credentials: Credentials,
        target: EndpointTarget,
        transport: Arc<dyn HttpTransport>,
        stats: Arc<RequestStats>,
    ) -> Self {
        Self {
            credentials,
            target,
            transport,
            session: RwLock::new(None),
            events: SessionEventBus::default(),
            stats,
        }
    }

    /// Run the login exchange and store the resulting session.
    ///
    /// Every call issues a fresh exchange, even when already authenticated.
    /// On failure the stored session is left as it was.
    pub async fn login(&self) -> Outcome<Session> {
        self.stats.record_login_attempt();
        info!(user = %self.credentials.username, "Logging in to {}", self.target.host());

        match self.exchange_login().await {
            Ok(session) => {
                *self.session.write().await = Some(session.clone());
                info!(user_id = %session.user_id, "Login succeeded");
                self.events.publish(SessionEvent::LoggedIn {
                    user_id: session.user_id.clone(),
                });
                Ok(session)
            }
            Err(e) => {
                self.stats.record_login_failure();
                warn!(error = %e, "Login failed");
                self.events.publish(SessionEvent::LoginFailed {
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn exchange_login(&self) -> Outcome<Session> {
        let call = CallDescriptor::post(self.target.make_uri(LOGIN_PATH)).with_json(
            serde_json::json!({
                "user": self.credentials.username,
                "password": self.credentials.password,
            }),
        );

        let response = self.transport.execute(call).await?;

        let parsed = response
            .body
            .as_deref()
            .and_then(|body| serde_json::from_str::<LoginResponse>(body).ok());

        if response.status != 200 {
            let reason = parsed
                .as_ref()
                .and_then(LoginResponse::reason)
                .unwrap_or("credentials rejected");
            return Err(ClientError::Authentication(format!(
                "HTTP {}: {reason}",
                response.status
            )));
        }

        let parsed = parsed.ok_or_else(|| {
            ClientError::Authentication("login response was not a valid session payload".into())
        })?;

        if let Some(status) = parsed.status.as_deref() {
            if status != "success" {
                let reason = parsed.reason().unwrap_or(status).to_string();
                return Err(ClientError::Authentication(reason));
            }
        }

        parsed
            .data
            .filter(|s| !s.auth_token.is_empty() && !s.user_id.is_empty())
            .ok_or_else(|| ClientError::Authentication("login response carried no token".into()))
    }

    /// Run the logout exchange for the stored session.
    ///
    /// The session is cleared only when the server acknowledges the logout;
    /// any failure leaves it in place so the caller can retry.
    pub async fn logout(&self) -> Outcome<serde_json::Value> {
        let Some(session) = self.current_session().await else {
            return Err(ClientError::Authentication("not logged in".into()));
        };

        let mut call = CallDescriptor::post(self.target.make_uri(LOGOUT_PATH));
        session.apply_to(&mut call);

        let response = self.transport.execute(call).await?;
        let ack = classify(response, &LOGOUT)?;

        let mut stored = self.session.write().await;
        // A concurrent login may have replaced the session we logged out.
        if stored.as_ref() == Some(&session) {
            *stored = None;
        }
        drop(stored);

        info!(user_id = %session.user_id, "Logged out");
        self.events.publish(SessionEvent::LoggedOut {
            user_id: session.user_id,
        });
        Ok(ack)
    }

    /// Drop `rejected` if it is still the stored session.
    ///
    /// Used when the server refuses a token mid-session, so the next call
    /// logs in again. Returns whether anything was cleared.
    pub async fn invalidate(&self, rejected: &Session) -> bool {
        let mut stored = self.session.write().await;
        if stored.as_ref() != Some(rejected) {
            return false;
        }
        *stored = None;
        drop(stored);

        debug!(user_id = %rejected.user_id, "Session invalidated");
        self.events.publish(SessionEvent::SessionInvalidated {
            user_id: rejected.user_id.clone(),
        });
        true
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn target(&self) -> &EndpointTarget {
        &self.target
    }

    /// Subscribe to login/logout notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}
