//! In-memory mock of the auth backend.

use std::sync::Arc;

use formkit_model::User;
use formkit_platform::{Storage, CURRENT_USER_KEY};
use tokio::time::sleep;

use crate::error::BackendError;
use crate::latency::MockLatency;
use crate::seed;
use crate::traits::AuthBackend;

/// Shared demo password accepted for every mock user.
const MOCK_PASSWORD: &str = "password";

/// Mock auth backend over a fixed user list.
///
/// The signed-in user's record is serialized into the injected
/// [`Storage`] under [`CURRENT_USER_KEY`], the same record a browser
/// host would keep in local storage.
pub struct MockAuthBackend {
    users: Vec<User>,
    storage: Arc<dyn Storage>,
    latency: MockLatency,
}

impl MockAuthBackend {
    /// Backend seeded with the demo users.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            users: seed::mock_users(),
            storage,
            latency: MockLatency::default(),
        }
    }

    /// Replace the latency configuration.
    #[must_use]
    pub fn with_latency(mut self, latency: MockLatency) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait::async_trait]
impl AuthBackend for MockAuthBackend {
    async fn login(&self, username: &str, password: &str) -> Result<User, BackendError> {
        sleep(self.latency.login).await;
        let user = self
            .users
            .iter()
            .find(|u| u.username == username)
            .filter(|_| password == MOCK_PASSWORD)
            .cloned()
            .ok_or(BackendError::InvalidCredentials)?;

        match serde_json::to_string(&user) {
            Ok(record) => self.storage.set(CURRENT_USER_KEY, &record),
            Err(err) => tracing::warn!(%err, "failed to persist session record"),
        }
        tracing::info!(username, "login succeeded");
        Ok(user)
    }

    async fn logout(&self) {
        self.storage.remove(CURRENT_USER_KEY);
        tracing::info!("session record cleared");
    }

    async fn current_user(&self) -> Option<User> {
        let record = self.storage.get(CURRENT_USER_KEY)?;
        match serde_json::from_str(&record) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(%err, "ignoring corrupt session record");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_model::UserRole;
    use formkit_platform::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn backend() -> (MockAuthBackend, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let backend =
            MockAuthBackend::new(storage.clone()).with_latency(MockLatency::zero());
        (backend, storage)
    }

    #[tokio::test]
    async fn admin_login_succeeds_and_persists() {
        let (backend, storage) = backend();
        let user = backend.login("admin", "password").await.unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, UserRole::Admin);
        assert!(storage.get(CURRENT_USER_KEY).is_some());
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let (backend, storage) = backend();
        let err = backend.login("admin", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(storage.get(CURRENT_USER_KEY).is_none());
    }

    #[tokio::test]
    async fn unknown_user_is_rejected() {
        let (backend, _) = backend();
        assert!(backend.login("nobody", "password").await.is_err());
    }

    #[tokio::test]
    async fn current_user_round_trips_through_storage() {
        let (backend, _) = backend();
        assert!(backend.current_user().await.is_none());
        backend.login("user", "password").await.unwrap();
        let restored = backend.current_user().await.unwrap();
        assert_eq!(restored.id, "2");
        backend.logout().await;
        assert!(backend.current_user().await.is_none());
    }

    #[tokio::test]
    async fn corrupt_session_record_is_ignored() {
        let (backend, storage) = backend();
        storage.set(CURRENT_USER_KEY, "not json");
        assert!(backend.current_user().await.is_none());
    }
}
