//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{CallDescriptor, HttpTransport, Payload, RawResponse, TransportError};

/// Transport over a shared `reqwest::Client`.
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// Wrap an existing client, keeping its timeouts and pool.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, call: CallDescriptor) -> Result<RawResponse, TransportError> {
        debug!(method = %call.method, uri = %call.uri, "HTTP request");

        let mut request = self.http.request(call.method, &call.uri);
        for (name, value) in &call.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request = match call.payload {
            Payload::Empty => request,
            Payload::Form(fields) => request.form(&fields),
            Payload::Json(body) => request.json(&body),
        };

        let response = request
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        debug!(status, bytes = body.len(), "HTTP response");
        Ok(RawResponse::new(status, Some(body)))
    }
}
