//! Tests for the login/logout lifecycle.

use std::sync::Arc;

use rocketchat_common::SessionEvent;
use serde_json::json;

use super::*;
use crate::stats::RequestStats;
use crate::target::EndpointTarget;
use crate::transport::mock::MockTransport;
use crate::transport::{Method, Payload, TransportError};
use crate::ClientError;

fn manager(transport: &Arc<MockTransport>) -> SessionManager {
    SessionManager::new(
        Credentials::new("bot", "secret"),
        EndpointTarget::new("http", "chat.test", 3000),
        Arc::clone(transport) as Arc<dyn crate::transport::HttpTransport>,
        Arc::new(RequestStats::new()),
    )
}

#[tokio::test]
async fn starts_unauthenticated() {
    let transport = Arc::new(MockTransport::new());
    let sessions = manager(&transport);
    assert!(!sessions.is_authenticated().await);
    assert!(sessions.current_session().await.is_none());
}

#[tokio::test]
async fn login_stores_session_and_sends_credentials() {
    let transport = Arc::new(MockTransport::new());
    transport.accept_login("tok", "u1");
    let sessions = manager(&transport);

    let session = sessions.login().await.unwrap();
    assert_eq!(session, Session::new("tok", "u1"));
    assert!(sessions.is_authenticated().await);
    assert_eq!(sessions.current_session().await, Some(session));

    let calls = transport.calls_to("v1/login");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::POST);
    assert_eq!(calls[0].uri, "http://chat.test:3000/api/v1/login");
    assert_eq!(
        calls[0].payload,
        Payload::Json(json!({"user": "bot", "password": "secret"}))
    );
    assert!(calls[0].header(AUTH_TOKEN_HEADER).is_none());
}

#[tokio::test]
async fn rejected_login_leaves_session_unset() {
    let transport = Arc::new(MockTransport::new());
    transport.reply_json(
        Method::POST,
        "v1/login",
        401,
        json!({"status": "error", "error": "Unauthorized", "message": "Unauthorized"}),
    );
    let sessions = manager(&transport);

    let err = sessions.login().await.unwrap_err();
    assert_eq!(err, ClientError::Authentication("HTTP 401: Unauthorized".into()));
    assert!(!sessions.is_authenticated().await);
}

#[tokio::test]
async fn error_status_in_200_body_is_rejected() {
    let transport = Arc::new(MockTransport::new());
    transport.reply_json(
        Method::POST,
        "v1/login",
        200,
        json!({"status": "error", "message": "User not found"}),
    );
    let sessions = manager(&transport);

    let err = sessions.login().await.unwrap_err();
    assert_eq!(err, ClientError::Authentication("User not found".into()));
    assert!(sessions.current_session().await.is_none());
}

#[tokio::test]
async fn partial_session_is_never_stored() {
    let transport = Arc::new(MockTransport::new());
    transport.reply_json(
        Method::POST,
        "v1/login",
        200,
        json!({"status": "success", "data": {"authToken": "tok", "userId": ""}}),
    );
    let sessions = manager(&transport);

    assert!(matches!(
        sessions.login().await,
        Err(ClientError::Authentication(_))
    ));
    assert!(!sessions.is_authenticated().await);
}

#[tokio::test]
async fn transport_failure_during_login() {
    let transport = Arc::new(MockTransport::new());
    transport.reply(
        Method::POST,
        "v1/login",
        Err(TransportError("connection refused".into())),
    );
    let sessions = manager(&transport);

    let err = sessions.login().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Transport(TransportError("connection refused".into()))
    );
    assert!(!sessions.is_authenticated().await);
}

#[tokio::test]
async fn failed_relogin_keeps_previous_session() {
    let transport = Arc::new(MockTransport::new());
    transport.accept_login("tok", "u1");
    transport.reply(Method::POST, "v1/login", Err(TransportError("down".into())));
    let sessions = manager(&transport);

    sessions.login().await.unwrap();
    assert!(sessions.login().await.is_err());
    assert_eq!(
        sessions.current_session().await,
        Some(Session::new("tok", "u1"))
    );
}

#[tokio::test]
async fn direct_logins_are_not_deduplicated() {
    let transport = Arc::new(MockTransport::new());
    transport.accept_login("tok", "u1");
    let sessions = manager(&transport);

    sessions.login().await.unwrap();
    sessions.login().await.unwrap();
    assert_eq!(transport.login_count(), 2);
}

#[tokio::test]
async fn login_then_logout_round_trip() {
    let transport = Arc::new(MockTransport::new());
    transport.accept_login("tok", "u1");
    transport.reply_json(
        Method::POST,
        "v1/logout",
        200,
        json!({"status": "success", "data": {"message": "You've been logged out!"}}),
    );
    let sessions = manager(&transport);

    sessions.login().await.unwrap();
    let ack = sessions.logout().await.unwrap();
    assert_eq!(ack["status"], "success");
    assert!(!sessions.is_authenticated().await);
    assert!(sessions.current_session().await.is_none());

    let logout = transport.calls_to("v1/logout");
    assert_eq!(logout.len(), 1);
    assert_eq!(logout[0].header(AUTH_TOKEN_HEADER), Some("tok"));
    assert_eq!(logout[0].header(USER_ID_HEADER), Some("u1"));
}

#[tokio::test]
async fn failed_logout_keeps_session() {
    let transport = Arc::new(MockTransport::new());
    transport.accept_login("tok", "u1");
    transport.reply(
        Method::POST,
        "v1/logout",
        Err(TransportError("connection reset".into())),
    );
    let sessions = manager(&transport);

    sessions.login().await.unwrap();
    let err = sessions.logout().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(
        sessions.current_session().await,
        Some(Session::new("tok", "u1"))
    );
}

#[tokio::test]
async fn rejected_logout_keeps_session() {
    let transport = Arc::new(MockTransport::new());
    transport.accept_login("tok", "u1");
    transport.reply(Method::POST, "v1/logout", Ok(crate::RawResponse::empty(500)));
    let sessions = manager(&transport);

    sessions.login().await.unwrap();
    let err = sessions.logout().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(sessions.is_authenticated().await);
}

#[tokio::test]
async fn logout_without_session_is_local_error() {
    let transport = Arc::new(MockTransport::new());
    let sessions = manager(&transport);

    let err = sessions.logout().await.unwrap_err();
    assert!(matches!(err, ClientError::Authentication(_)));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn invalidate_only_clears_matching_session() {
    let transport = Arc::new(MockTransport::new());
    transport.accept_login("tok", "u1");
    let sessions = manager(&transport);
    sessions.login().await.unwrap();

    assert!(!sessions.invalidate(&Session::new("old", "u1")).await);
    assert!(sessions.is_authenticated().await);

    assert!(sessions.invalidate(&Session::new("tok", "u1")).await);
    assert!(!sessions.is_authenticated().await);
}

#[tokio::test]
async fn lifecycle_events_are_published() {
    let transport = Arc::new(MockTransport::new());
    transport.reply(Method::POST, "v1/login", Err(TransportError("down".into())));
    transport.accept_login("tok", "u1");
    transport.reply_json(Method::POST, "v1/logout", 200, json!({"status": "success"}));
    let sessions = manager(&transport);
    let mut events = sessions.subscribe();

    assert!(sessions.login().await.is_err());
    sessions.login().await.unwrap();
    sessions.logout().await.unwrap();

    assert!(matches!(
        events.recv().await.unwrap(),
        SessionEvent::LoginFailed { .. }
    ));
    assert_eq!(
        events.recv().await.unwrap(),
        SessionEvent::LoggedIn {
            user_id: "u1".into()
        }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        SessionEvent::LoggedOut {
            user_id: "u1".into()
        }
    );
}
