//! Scripted in-memory transport for tests.
//!
//! Replies are keyed by method and the path after `/api/`. Each route holds
//! a queue; the last reply in a queue is repeated for any further calls.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{CallDescriptor, HttpTransport, Method, RawResponse, TransportError};

type Reply = Result<RawResponse, TransportError>;

#[derive(Default)]
pub(crate) struct MockTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    calls: Mutex<Vec<CallDescriptor>>,
    latency: Option<Duration>,
}

pub(crate) fn api_path(uri: &str) -> &str {
    uri.split_once("/api/").map_or(uri, |(_, path)| path)
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Delay every reply, so concurrent callers interleave.
    pub(crate) fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub(crate) fn reply(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub(crate) fn reply_json(
        &self,
        method: Method,
        path: &str,
        status: u16,
        body: serde_json::Value,
    ) -> &Self {
        self.reply(method, path, Ok(RawResponse::json(status, &body)))
    }

    /// Script a successful `v1/login` exchange.
    pub(crate) fn accept_login(&self, token: &str, user_id: &str) -> &Self {
        self.reply_json(
            Method::POST,
            "v1/login",
            200,
            serde_json::json!({
                "status": "success",
                "data": { "authToken": token, "userId": user_id }
            }),
        )
    }

    pub(crate) fn calls(&self) -> Vec<CallDescriptor> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_to(&self, path: &str) -> Vec<CallDescriptor> {
        self.calls()
            .into_iter()
            .filter(|c| api_path(&c.uri) == path)
            .collect()
    }

    pub(crate) fn login_count(&self) -> usize {
        self.calls_to("v1/login").len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, call: CallDescriptor) -> Result<RawResponse, TransportError> {
        let key = (call.method.clone(), api_path(&call.uri).to_string());
        self.calls.lock().unwrap().push(call);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Err(TransportError(format!("no route for {} {}", key.0, key.1))),
        }
    }
}
