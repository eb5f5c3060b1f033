//! User-notification seam.

use std::time::Duration;

use parking_lot::Mutex;

/// One toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text
    pub message: String,
    /// Label of the dismiss action
    pub action_label: String,
    /// How long the toast stays up
    pub duration: Duration,
}

/// User-visible toasts, replacing the host snack bar.
pub trait Notifier: Send + Sync {
    /// Show a toast.
    fn show(&self, message: &str, action_label: &str, duration: Duration);
}

/// Notifier that drops toasts, logging them at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn show(&self, message: &str, _action_label: &str, _duration: Duration) {
        tracing::debug!(message, "notification dropped (no host surface)");
    }
}

/// Notifier that records every toast, for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts shown so far, in order.
    #[must_use]
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().clone()
    }

    /// Most recent toast, when any.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.shown.lock().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, message: &str, action_label: &str, duration: Duration) {
        self.shown.lock().push(Notification {
            message: message.to_string(),
            action_label: action_label.to_string(),
            duration,
        });
    }
}
