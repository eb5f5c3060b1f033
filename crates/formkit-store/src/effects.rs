//! Async orchestrators: the side-effect boundary.
//!
//! One orchestrator per action family. Each listens on the store's
//! action stream; every request action spawns an independent task that
//! awaits the backend call and dispatches the matching success or
//! failure action. There is no de-duplication, cancellation, or
//! timeout: a request that starts always runs to its terminal dispatch,
//! even if whatever awaited it is gone.

use std::sync::Arc;

use formkit_backend::{AuthBackend, FormBackend};
use formkit_platform::Navigator;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::action::{Action, AuthAction, FormBuilderAction};
use crate::store::Store;

/// Orchestrator for the auth action family.
///
/// Besides mapping requests to terminal actions, it fires the two
/// navigation side effects: `/dashboard` on login success and `/login`
/// on logout success. Navigations dispatch no further actions.
pub struct AuthEffects {
    store: Arc<Store>,
    backend: Arc<dyn AuthBackend>,
    navigator: Arc<dyn Navigator>,
}

impl AuthEffects {
    /// Wire the orchestrator to its collaborators.
    #[must_use]
    pub fn new(
        store: Arc<Store>,
        backend: Arc<dyn AuthBackend>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            backend,
            navigator,
        }
    }

    /// Run on a background task until the store is dropped.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Consume the action stream.
    pub async fn run(self) {
        let mut actions = self.store.actions();
        loop {
            match actions.recv().await {
                Ok(Action::Auth(action)) => self.handle(action),
                Ok(Action::FormBuilder(_)) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "auth effects lagged behind the action stream");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    fn handle(&self, action: AuthAction) {
        match action {
            AuthAction::Login { username, password } => {
                let store = Arc::clone(&self.store);
                let backend = Arc::clone(&self.backend);
                tokio::spawn(async move {
                    match backend.login(&username, &password).await {
                        Ok(user) => store.dispatch(AuthAction::LoginSuccess { user }),
                        Err(err) => store.dispatch(AuthAction::LoginFailure {
                            error: err.to_string(),
                        }),
                    }
                });
            }
            AuthAction::LoginSuccess { .. } => self.navigator.navigate_to("/dashboard"),
            AuthAction::Logout => {
                let store = Arc::clone(&self.store);
                let backend = Arc::clone(&self.backend);
                tokio::spawn(async move {
                    backend.logout().await;
                    store.dispatch(AuthAction::LogoutSuccess);
                });
            }
            AuthAction::LogoutSuccess => self.navigator.navigate_to("/login"),
            AuthAction::LoadCurrentUser => {
                let store = Arc::clone(&self.store);
                let backend = Arc::clone(&self.backend);
                tokio::spawn(async move {
                    match backend.current_user().await {
                        Some(user) => {
                            store.dispatch(AuthAction::LoadCurrentUserSuccess { user });
                        }
                        None => store.dispatch(AuthAction::Logout),
                    }
                });
            }
            AuthAction::LoginFailure { .. } | AuthAction::LoadCurrentUserSuccess { .. } => {}
        }
    }
}

/// Orchestrator for the form-builder action family.
pub struct FormBuilderEffects {
    store: Arc<Store>,
    backend: Arc<dyn FormBackend>,
}

impl FormBuilderEffects {
    /// Wire the orchestrator to its collaborators.
    #[must_use]
    pub fn new(store: Arc<Store>, backend: Arc<dyn FormBackend>) -> Self {
        Self { store, backend }
    }

    /// Run on a background task until the store is dropped.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Consume the action stream.
    pub async fn run(self) {
        let mut actions = self.store.actions();
        loop {
            match actions.recv().await {
                Ok(Action::FormBuilder(action)) => self.handle(action),
                Ok(Action::Auth(_)) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "form builder effects lagged behind the action stream");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    #[allow(clippy::too_many_lines)]
    fn handle(&self, action: FormBuilderAction) {
        use FormBuilderAction as A;
        let store = Arc::clone(&self.store);
        let backend = Arc::clone(&self.backend);
        match action {
            A::LoadTemplates => {
                tokio::spawn(async move {
                    match backend.list_templates().await {
                        Ok(templates) => {
                            store.dispatch(A::LoadTemplatesSuccess { templates });
                        }
                        Err(err) => store.dispatch(A::LoadTemplatesFailure {
                            error: err.to_string(),
                        }),
                    }
                });
            }
            A::LoadTemplate { id } => {
                tokio::spawn(async move {
                    match backend.get_template(&id).await {
                        Ok(template) => store.dispatch(A::LoadTemplateSuccess { template }),
                        Err(err) => store.dispatch(A::LoadTemplateFailure {
                            error: err.to_string(),
                        }),
                    }
                });
            }
            A::CreateTemplate { draft } => {
                tokio::spawn(async move {
                    match backend.create_template(draft).await {
                        Ok(template) => store.dispatch(A::CreateTemplateSuccess { template }),
                        Err(err) => store.dispatch(A::CreateTemplateFailure {
                            error: err.to_string(),
                        }),
                    }
                });
            }
            A::UpdateTemplate { id, patch } => {
                tokio::spawn(async move {
                    match backend.update_template(&id, patch).await {
                        Ok(template) => store.dispatch(A::UpdateTemplateSuccess { template }),
                        Err(err) => store.dispatch(A::UpdateTemplateFailure {
                            error: err.to_string(),
                        }),
                    }
                });
            }
            A::DeleteTemplate { id } => {
                tokio::spawn(async move {
                    match backend.delete_template(&id).await {
                        Ok(()) => store.dispatch(A::DeleteTemplateSuccess { id }),
                        Err(err) => store.dispatch(A::DeleteTemplateFailure {
                            error: err.to_string(),
                        }),
                    }
                });
            }
            A::SubmitForm {
                template_id,
                data,
                submitted_by,
            } => {
                tokio::spawn(async move {
                    match backend.submit_form(&template_id, data, submitted_by).await {
                        Ok(submission) => store.dispatch(A::SubmitFormSuccess { submission }),
                        Err(err) => store.dispatch(A::SubmitFormFailure {
                            error: err.to_string(),
                        }),
                    }
                });
            }
            A::LoadSubmissions => {
                tokio::spawn(async move {
                    match backend.list_submissions().await {
                        Ok(submissions) => {
                            store.dispatch(A::LoadSubmissionsSuccess { submissions });
                        }
                        Err(err) => store.dispatch(A::LoadSubmissionsFailure {
                            error: err.to_string(),
                        }),
                    }
                });
            }
            A::LoadSubmissionsByTemplate { template_id } => {
                tokio::spawn(async move {
                    match backend.list_submissions_by_template(&template_id).await {
                        Ok(submissions) => {
                            store.dispatch(A::LoadSubmissionsByTemplateSuccess { submissions });
                        }
                        Err(err) => store.dispatch(A::LoadSubmissionsByTemplateFailure {
                            error: err.to_string(),
                        }),
                    }
                });
            }
            // Terminal actions: nothing to orchestrate.
            _ => {}
        }
    }
}
