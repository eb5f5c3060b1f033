//! In-memory mock of the form backend.

use chrono::Utc;
use formkit_model::{
    generate_id, FormSubmission, FormTemplate, SubmissionData, TemplateDraft, TemplatePatch,
};
use parking_lot::Mutex;
use tokio::time::sleep;

use crate::error::BackendError;
use crate::latency::MockLatency;
use crate::seed;
use crate::traits::FormBackend;

/// Mock form backend holding templates and submissions in memory.
///
/// Every operation sleeps its configured latency before touching state,
/// so overlapping requests resolve in issuance order only because the
/// delays are fixed per operation. The lock is never held across the
/// suspend point.
pub struct MockFormBackend {
    templates: Mutex<Vec<FormTemplate>>,
    submissions: Mutex<Vec<FormSubmission>>,
    latency: MockLatency,
}

impl MockFormBackend {
    /// Backend seeded with the demo "Contact Form" template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: Mutex::new(vec![seed::contact_form_template()]),
            submissions: Mutex::new(Vec::new()),
            latency: MockLatency::default(),
        }
    }

    /// Backend with no seeded data.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            templates: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
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

impl Default for MockFormBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FormBackend for MockFormBackend {
    async fn list_templates(&self) -> Result<Vec<FormTemplate>, BackendError> {
        sleep(self.latency.list).await;
        Ok(self.templates.lock().clone())
    }

    async fn get_template(&self, id: &str) -> Result<FormTemplate, BackendError> {
        sleep(self.latency.get).await;
        self.templates
            .lock()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(BackendError::TemplateNotFound)
    }

    async fn create_template(&self, draft: TemplateDraft) -> Result<FormTemplate, BackendError> {
        sleep(self.latency.mutate).await;
        let now = Utc::now();
        let template = FormTemplate {
            id: generate_id(),
            name: draft.name,
            description: draft.description,
            fields: draft.fields,
            created_by: draft.created_by,
            created_at: now,
            updated_at: now,
            is_active: draft.is_active,
        };
        self.templates.lock().push(template.clone());
        tracing::debug!(id = %template.id, "template created");
        Ok(template)
    }

    async fn update_template(
        &self,
        id: &str,
        patch: TemplatePatch,
    ) -> Result<FormTemplate, BackendError> {
        sleep(self.latency.mutate).await;
        let mut templates = self.templates.lock();
        let template = templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BackendError::TemplateNotFound)?;
        patch.apply(template);
        template.updated_at = Utc::now();
        Ok(template.clone())
    }

    async fn delete_template(&self, id: &str) -> Result<(), BackendError> {
        sleep(self.latency.mutate).await;
        let mut templates = self.templates.lock();
        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            return Err(BackendError::TemplateNotFound);
        }
        tracing::debug!(id, "template deleted");
        Ok(())
    }

    async fn submit_form(
        &self,
        template_id: &str,
        data: SubmissionData,
        submitted_by: Option<String>,
    ) -> Result<FormSubmission, BackendError> {
        sleep(self.latency.submit).await;
        let template_name = self
            .templates
            .lock()
            .iter()
            .find(|t| t.id == template_id)
            .map(|t| t.name.clone())
            .ok_or(BackendError::TemplateNotFound)?;
        let submission = FormSubmission {
            id: generate_id(),
            form_template_id: template_id.to_string(),
            form_template_name: template_name,
            data,
            submitted_by,
            submitted_at: Utc::now(),
        };
        self.submissions.lock().push(submission.clone());
        tracing::debug!(id = %submission.id, template_id, "submission recorded");
        Ok(submission)
    }

    async fn list_submissions(&self) -> Result<Vec<FormSubmission>, BackendError> {
        sleep(self.latency.list).await;
        Ok(self.submissions.lock().clone())
    }

    async fn list_submissions_by_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<FormSubmission>, BackendError> {
        sleep(self.latency.list).await;
        Ok(self
            .submissions
            .lock()
            .iter()
            .filter(|s| s.form_template_id == template_id)
            .cloned()
            .collect())
    }
}
