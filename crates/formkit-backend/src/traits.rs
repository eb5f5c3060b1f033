//! Async backend seams consumed by the effects.

use async_trait::async_trait;
use formkit_model::{
    FormSubmission, FormTemplate, SubmissionData, TemplateDraft, TemplatePatch, User,
};

use crate::error::BackendError;

/// Template and submission operations.
#[async_trait]
pub trait FormBackend: Send + Sync {
    /// List every known template.
    async fn list_templates(&self) -> Result<Vec<FormTemplate>, BackendError>;

    /// Fetch one template by id.
    async fn get_template(&self, id: &str) -> Result<FormTemplate, BackendError>;

    /// Create a template; the backend assigns id and timestamps.
    async fn create_template(&self, draft: TemplateDraft) -> Result<FormTemplate, BackendError>;

    /// Merge a patch into the template with `id` and bump `updated_at`.
    async fn update_template(
        &self,
        id: &str,
        patch: TemplatePatch,
    ) -> Result<FormTemplate, BackendError>;

    /// Delete the template with `id`.
    async fn delete_template(&self, id: &str) -> Result<(), BackendError>;

    /// Record a submission against the template with `template_id`.
    async fn submit_form(
        &self,
        template_id: &str,
        data: SubmissionData,
        submitted_by: Option<String>,
    ) -> Result<FormSubmission, BackendError>;

    /// List every recorded submission.
    async fn list_submissions(&self) -> Result<Vec<FormSubmission>, BackendError>;

    /// List submissions recorded against one template.
    async fn list_submissions_by_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<FormSubmission>, BackendError>;
}

/// Authentication operations.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Authenticate and persist the session record.
    async fn login(&self, username: &str, password: &str) -> Result<User, BackendError>;

    /// Drop the persisted session record.
    async fn logout(&self);

    /// Read the persisted session record, when one exists and parses.
    ///
    /// This is the only place cold-start persistence is consulted.
    async fn current_user(&self) -> Option<User>;
}
