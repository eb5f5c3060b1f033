//! Artificial latency configuration for the mock backends.

use std::time::Duration;

/// Per-operation artificial delays.
///
/// Defaults simulate a plausible network round trip per operation.
/// Tests use [`MockLatency::zero`] so effects settle deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
    /// Listing templates or submissions
    pub list: Duration,
    /// Fetching one template
    pub get: Duration,
    /// Creating, updating, or deleting a template
    pub mutate: Duration,
    /// Recording a submission
    pub submit: Duration,
    /// Logging in
    pub login: Duration,
}

impl MockLatency {
    /// No artificial delay on any operation.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            mutate: Duration::ZERO,
            submit: Duration::ZERO,
            login: Duration::ZERO,
        }
    }

    /// Uniform delay on every operation.
    #[inline]
    #[must_use]
    pub fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            get: delay,
            mutate: delay,
            submit: delay,
            login: delay,
        }
    }
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            get: Duration::from_millis(300),
            mutate: Duration::from_millis(500),
            submit: Duration::from_millis(1000),
            login: Duration::from_millis(1000),
        }
    }
}
