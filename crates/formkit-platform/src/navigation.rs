//! Route-change seam.

use parking_lot::Mutex;

/// Fire-and-forget navigation, replacing the host router.
///
/// Invoked by effects and by the form runtime after submit/cancel.
/// Navigations never dispatch state actions themselves.
pub trait Navigator: Send + Sync {
    /// Navigate to `path` (e.g. `/dashboard`, `/login?returnUrl=...`).
    fn navigate_to(&self, path: &str);
}

/// Navigator that drops navigations, logging them at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate_to(&self, path: &str) {
        tracing::debug!(path, "navigation dropped (no host router)");
    }
}

/// Navigator that records every requested path, for tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Create an empty recorder.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths navigated to so far, in order.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().clone()
    }

    /// Most recent path, when any.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.paths.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.paths.lock().push(path.to_string());
    }
}
