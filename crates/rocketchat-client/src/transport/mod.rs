//! HTTP transport seam.
//!
//! The dispatcher only talks to an [`HttpTransport`]; production code uses
//! [`ReqwestTransport`], tests substitute a scripted in-memory one.

mod http;
#[cfg(test)]
pub(crate) mod mock;

use std::collections::BTreeMap;

use async_trait::async_trait;
pub use reqwest::Method;

pub use http::ReqwestTransport;

/// Connection-level failure: DNS, refused connection, timeout, broken body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Body attached to an outbound call.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    Empty,
    /// `application/x-www-form-urlencoded` fields.
    Form(Vec<(String, String)>),
    Json(serde_json::Value),
}

/// A fully specified, not-yet-sent request.
#[derive(Debug, Clone, PartialEq)]
pub struct CallDescriptor {
    pub method: Method,
    pub uri: String,
    pub headers: BTreeMap<String, String>,
    pub payload: Payload,
}

impl CallDescriptor {
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            headers: BTreeMap::new(),
            payload: Payload::Empty,
        }
    }

    pub fn get(uri: impl Into<String>) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: impl Into<String>) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_form<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.payload = Payload::Form(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.payload = Payload::Json(body);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// What came back from the server, before any classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// `None` when the server sent no body (or an empty one).
    pub body: Option<String>,
}

impl RawResponse {
    pub fn new(status: u16, body: Option<String>) -> Self {
        Self {
            status,
            body: body.filter(|b| !b.is_empty()),
        }
    }

    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, Some(body.to_string()))
    }

    pub fn empty(status: u16) -> Self {
        Self::new(status, None)
    }
}

/// Executes call descriptors against the network.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, call: CallDescriptor) -> Result<RawResponse, TransportError>;
}
