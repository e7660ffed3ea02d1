//! Authenticated request dispatch and response classification.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::session::{Session, SessionManager};
use crate::stats::RequestStats;
use crate::transport::{CallDescriptor, HttpTransport, RawResponse};
use crate::{ClientError, Outcome};

/// Fixed failure messages for one endpoint operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Short name used in logs and stats.
    pub name: &'static str,
    /// Reported as [`ClientError::NotFound`] on HTTP 404.
    pub not_found: &'static str,
    /// Reported inside [`ClientError::UnexpectedStatus`] on any other non-200.
    pub unexpected: &'static str,
}

/// Map a raw response onto the uniform outcome.
///
/// 404 and other non-200 statuses are errors; a 200 needs a JSON body.
pub fn classify(response: RawResponse, op: &Operation) -> Outcome<serde_json::Value> {
    match response.status {
        200 => {}
        404 => return Err(ClientError::NotFound(op.not_found.to_string())),
        status => {
            return Err(ClientError::UnexpectedStatus {
                status,
                message: op.unexpected.to_string(),
            })
        }
    }

    let body = response
        .body
        .filter(|b| !b.trim().is_empty())
        .ok_or(ClientError::EmptyBody)?;

    serde_json::from_str(&body).map_err(|e| ClientError::MalformedBody(e.to_string()))
}

/// Sends call descriptors with session headers attached, logging in first
/// when the client has no session.
pub struct Dispatcher {
    sessions: Arc<SessionManager>,
    transport: Arc<dyn HttpTransport>,
    stats: Arc<RequestStats>,
    /// Serializes on-demand logins so concurrent first calls share one exchange.
    login_gate: Mutex<()>,
}

impl Dispatcher {
    pub fn new(
        sessions: Arc<SessionManager>,
        transport: Arc<dyn HttpTransport>,
        stats: Arc<RequestStats>,
    ) -> Self {
        Self {
            sessions,
            transport,
            stats,
            login_gate: Mutex::new(()),
        }
    }

    /// Execute `call` on behalf of the stored session.
    ///
    /// If no session exists, logs in first; a failed login is returned as-is
    /// and `call` is never sent. A 401 answer drops the session that was
    /// used, so the next dispatch re-authenticates.
    pub async fn dispatch(&self, mut call: CallDescriptor) -> Outcome<RawResponse> {
        let session = self.ensure_session().await?;
        session.apply_to(&mut call);

        debug!(method = %call.method, uri = %call.uri, "Dispatching request");
        self.stats.record_call();

        let response = self.transport.execute(call).await?;

        if response.status == 401 {
            warn!("Server rejected the session token");
            self.sessions.invalidate(&session).await;
        }

        Ok(response)
    }

    /// Dispatch and classify the response of one named operation.
    pub async fn call(&self, call: CallDescriptor, op: &Operation) -> Outcome<serde_json::Value> {
        self.stats.record_operation(op.name);
        let result = self.dispatch(call).await.and_then(|r| classify(r, op));
        if let Err(ref e) = result {
            self.stats.record_failure();
            debug!(operation = op.name, error = %e, "Operation failed");
        }
        result
    }

    async fn ensure_session(&self) -> Outcome<Session> {
        match self.sessions.current_session().await {
            Some(session) => Ok(session),
            None => self.authenticate().await,
        }
    }

    async fn authenticate(&self) -> Outcome<Session> {
        let _gate = self.login_gate.lock().await;

        // Another caller may have finished logging in while we waited.
        if let Some(session) = self.sessions.current_session().await {
            return Ok(session);
        }

        self.sessions.login().await.map_err(|e| {
            warn!(error = %e, "Login before dispatch failed, request not sent");
            e
        })
    }
}
