//! Session management.
//!
//! A `SessionManager` owns the token pair returned by the login exchange
//! and is the only place it is created or destroyed.

mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::SessionManager;
pub use types::{Credentials, Session, AUTH_TOKEN_HEADER, USER_ID_HEADER};
