//! Client construction parameters.

use std::time::Duration;

use crate::session::Credentials;
use crate::target::EndpointTarget;

/// Everything a [`RocketChatApi`](crate::RocketChatApi) needs to start.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub target: EndpointTarget,
    pub credentials: Credentials,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Credentials against the demo server, with default timeouts.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            target: EndpointTarget::default(),
            credentials: Credentials::new(username, password),
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.target = EndpointTarget::new(protocol, self.target.host(), self.target.port());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.target = EndpointTarget::new(self.target.protocol(), host, self.target.port());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.target = EndpointTarget::new(self.target.protocol(), self.target.host(), port);
        self
    }

    pub fn with_timeouts(mut self, connect_timeout: Duration, timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.timeout = timeout;
        self
    }
}
