use tokio::sync::broadcast;

/// Authentication lifecycle notifications published by the session manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn { user_id: String },
    LoginFailed { reason: String },
    LoggedOut { user_id: String },
    /// The server rejected the stored token; the next call re-authenticates.
    SessionInvalidated { user_id: String },
}

pub struct SessionEventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl SessionEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: SessionEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for SessionEventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
