//! Request counters shared by the session manager and dispatcher.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Tracks login exchanges, dispatched calls and failures per client.
#[derive(Default)]
pub struct RequestStats {
    login_attempts: AtomicU64,
    login_failures: AtomicU64,
    calls: AtomicU64,
    failures: AtomicU64,
    /// Invocations broken down by operation name.
    by_operation: Mutex<HashMap<&'static str, u64>>,
}

/// Point-in-time copy of [`RequestStats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub login_attempts: u64,
    pub login_failures: u64,
    pub calls: u64,
    pub failures: u64,
}

impl RequestStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_login_attempt(&self) {
        self.login_attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_login_failure(&self) {
        self.login_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_operation(&self, name: &'static str) {
        let mut by_operation = self
            .by_operation
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *by_operation.entry(name).or_default() += 1;
    }

    /// Number of times an operation was invoked.
    pub fn for_operation(&self, name: &str) -> u64 {
        self.by_operation
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            login_attempts: self.login_attempts.load(Ordering::Relaxed),
            login_failures: self.login_failures.load(Ordering::Relaxed),
            calls: self.calls.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters.
    pub fn reset(&self) {
        self.login_attempts.store(0, Ordering::Relaxed);
        self.login_failures.store(0, Ordering::Relaxed);
        self.calls.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
        self.by_operation
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}
