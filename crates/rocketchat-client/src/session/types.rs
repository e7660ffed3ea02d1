//! Credential and session value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transport::CallDescriptor;

pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Username and password, fixed for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The token pair issued by a successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub auth_token: String,
    pub user_id: String,
}

impl Session {
    pub fn new(auth_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            user_id: user_id.into(),
        }
    }

    /// Attach `X-Auth-Token` and `X-User-Id` to a call.
    pub fn apply_to(&self, call: &mut CallDescriptor) {
        call.headers
            .insert(AUTH_TOKEN_HEADER.to_string(), self.auth_token.clone());
        call.headers
            .insert(USER_ID_HEADER.to_string(), self.user_id.clone());
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("auth_token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Body of the `v1/login` exchange.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub status: Option<String>,
    pub data: Option<Session>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl LoginResponse {
    /// Human readable rejection reason, if the server gave one.
    pub(crate) fn reason(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}
