//! Notification sink trait and implementations.

use std::sync::{Arc, Mutex};

/// Trait for receiving user-visible notifications.
///
/// Services emit exactly one error notification per failed remote
/// operation through this trait.
///
/// # Design Rules
///
/// - `notify_error()` must be fast and non-blocking (no network calls)
/// - Failure to display must not affect domain operations (best-effort)
pub trait NotificationSink: Send + Sync {
    /// Surface a user-visible error message.
    fn notify_error(&self, message: &str);
}

/// No-op implementation for tests or contexts that don't display anything.
#[derive(Clone, Default)]
pub struct NoOpNotificationSink;

impl NotificationSink for NoOpNotificationSink {
    fn notify_error(&self, _message: &str) {
        // Intentionally empty - notifications are discarded
    }
}

/// Mock sink for testing - collects emitted messages.
#[derive(Clone, Default)]
pub struct MockNotificationSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Returns the number of collected messages.
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Returns true if no messages have been collected.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().unwrap().is_empty()
    }

    /// Clears collected messages.
    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl NotificationSink for MockNotificationSink {
    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpNotificationSink;
        sink.notify_error("ignored");
    }

    #[test]
    fn test_mock_sink_collects_messages() {
        let sink = MockNotificationSink::new();
        assert!(sink.is_empty());

        sink.notify_error("first");
        sink.notify_error("second");
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.messages(), vec!["first", "second"]);

        sink.clear();
        assert!(sink.is_empty());
    }
}
