//! Key/value persistence seam.

use dashmap::DashMap;

/// Key/value persistence, replacing browser local storage.
///
/// Implementations must be safe to call before any rendering surface
/// exists; a no-op fallback is acceptable. The core uses this solely to
/// persist and restore the signed-in user's serialized record.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str);
    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// In-memory storage backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

/// Storage that discards writes and reads nothing.
///
/// Used when no persistence surface exists (e.g. server-side render).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStorage;

impl Storage for NoopStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}
