//! Server address composition.

pub const DEFAULT_PROTOCOL: &str = "http";
pub const DEFAULT_HOST: &str = "demo.rocket.chat";
pub const DEFAULT_PORT: u16 = 80;

const API_BASE_PATH: &str = "/api/";

/// Static connection parameters for one Rocket.Chat server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTarget {
    protocol: String,
    host: String,
    port: u16,
}

impl EndpointTarget {
    /// Empty protocol/host or a zero port fall back to the demo server defaults.
    pub fn new(protocol: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        let protocol = protocol.into();
        let host = host.into();
        Self {
            protocol: if protocol.is_empty() {
                DEFAULT_PROTOCOL.to_string()
            } else {
                protocol
            },
            host: if host.is_empty() {
                DEFAULT_HOST.to_string()
            } else {
                host
            },
            port: if port == 0 { DEFAULT_PORT } else { port },
        }
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Build the full address of a REST path, e.g. `v1/login` becomes
    /// `http://demo.rocket.chat:80/api/v1/login`.
    ///
    /// The result is percent-decoded.
    pub fn make_uri(&self, path: &str) -> String {
        let uri = format!(
            "{}://{}:{}{API_BASE_PATH}{}",
            self.protocol,
            self.host,
            self.port,
            path.trim_start_matches('/')
        );
        match urlencoding::decode(&uri) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => uri,
        }
    }
}

impl Default for EndpointTarget {
    fn default() -> Self {
        Self::new(DEFAULT_PROTOCOL, DEFAULT_HOST, DEFAULT_PORT)
    }
}
