//! Host collaborator seams
//!
//! The core never touches the host environment directly. Three small
//! traits stand in for it:
//! - [`Storage`] — key/value persistence (browser local storage in a
//!   web host)
//! - [`Navigator`] — fire-and-forget route changes
//! - [`Notifier`] — user-visible toasts
//!
//! Each trait ships an in-memory or no-op implementation that is safe
//! to use before any rendering surface exists, plus a recording
//! implementation for tests.

pub mod navigation;
pub mod notify;
pub mod storage;

pub use navigation::{Navigator, NoopNavigator, RecordingNavigator};
pub use notify::{NoopNotifier, Notification, Notifier, RecordingNotifier};
pub use storage::{MemoryStorage, NoopStorage, Storage};

/// Storage key holding the serialized signed-in user.
pub const CURRENT_USER_KEY: &str = "currentUser";
