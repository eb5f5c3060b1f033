//! The action catalog.
//!
//! Every state transition request is one variant of a closed sum type.
//! Side-effecting families follow the request → success → failure
//! pattern; failure payloads carry the error's display string.

use formkit_model::{
    FieldPatch, FormField, FormSubmission, FormTemplate, SubmissionData, TemplateDraft,
    TemplatePatch, User,
};

/// Auth-slice actions.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    /// Request sign-in with credentials
    Login {
        /// Login name
        username: String,
        /// Plain-text password (mock backend only)
        password: String,
    },
    /// Sign-in resolved
    LoginSuccess {
        /// The authenticated user
        user: User,
    },
    /// Sign-in rejected
    LoginFailure {
        /// User-facing failure message
        error: String,
    },
    /// Request sign-out
    Logout,
    /// Sign-out completed; auth slice resets to its initial value
    LogoutSuccess,
    /// Request session restore from persisted record (boot only)
    LoadCurrentUser,
    /// Session restore resolved
    LoadCurrentUserSuccess {
        /// The restored user
        user: User,
    },
}

/// Form-builder-slice actions.
#[derive(Debug, Clone, PartialEq)]
pub enum FormBuilderAction {
    /// Request the template list
    LoadTemplates,
    /// Template list resolved
    LoadTemplatesSuccess {
        /// All known templates
        templates: Vec<FormTemplate>,
    },
    /// Template list rejected
    LoadTemplatesFailure {
        /// User-facing failure message
        error: String,
    },

    /// Request one template by id
    LoadTemplate {
        /// Template id
        id: String,
    },
    /// Template fetch resolved; becomes the current template
    LoadTemplateSuccess {
        /// The fetched template
        template: FormTemplate,
    },
    /// Template fetch rejected
    LoadTemplateFailure {
        /// User-facing failure message
        error: String,
    },

    /// Request template creation
    CreateTemplate {
        /// Creation payload
        draft: TemplateDraft,
    },
    /// Creation resolved; appended and made current
    CreateTemplateSuccess {
        /// The created template
        template: FormTemplate,
    },
    /// Creation rejected
    CreateTemplateFailure {
        /// User-facing failure message
        error: String,
    },

    /// Request template update
    UpdateTemplate {
        /// Template id
        id: String,
        /// Partial update
        patch: TemplatePatch,
    },
    /// Update resolved; replaced in the list and made current
    UpdateTemplateSuccess {
        /// The updated template
        template: FormTemplate,
    },
    /// Update rejected
    UpdateTemplateFailure {
        /// User-facing failure message
        error: String,
    },

    /// Request template deletion
    DeleteTemplate {
        /// Template id
        id: String,
    },
    /// Deletion resolved; removed from the list, current cleared if it
    /// was the deleted one
    DeleteTemplateSuccess {
        /// Deleted template id
        id: String,
    },
    /// Deletion rejected
    DeleteTemplateFailure {
        /// User-facing failure message
        error: String,
    },

    /// Append a field to the current template
    AddField {
        /// The new field
        field: FormField,
    },
    /// Merge a partial update into a field of the current template
    UpdateField {
        /// Field id
        id: String,
        /// Partial update
        patch: FieldPatch,
    },
    /// Remove a field from the current template
    RemoveField {
        /// Field id
        id: String,
    },
    /// Replace the current template's field list wholesale
    ///
    /// Ordering authority is the caller (the builder session), not the
    /// reducer.
    ReorderFields {
        /// Replacement field list
        fields: Vec<FormField>,
    },

    /// Request a form submission
    SubmitForm {
        /// Template id
        template_id: String,
        /// Field id to value
        data: SubmissionData,
        /// Submitter user id, when known
        submitted_by: Option<String>,
    },
    /// Submission resolved; appended to the submissions list
    SubmitFormSuccess {
        /// The recorded submission
        submission: FormSubmission,
    },
    /// Submission rejected
    SubmitFormFailure {
        /// User-facing failure message
        error: String,
    },

    /// Request every submission
    LoadSubmissions,
    /// Submission list resolved
    LoadSubmissionsSuccess {
        /// All recorded submissions
        submissions: Vec<FormSubmission>,
    },
    /// Submission list rejected
    LoadSubmissionsFailure {
        /// User-facing failure message
        error: String,
    },

    /// Request submissions for one template
    LoadSubmissionsByTemplate {
        /// Template id
        template_id: String,
    },
    /// Per-template submission list resolved
    LoadSubmissionsByTemplateSuccess {
        /// Matching submissions
        submissions: Vec<FormSubmission>,
    },
    /// Per-template submission list rejected
    LoadSubmissionsByTemplateFailure {
        /// User-facing failure message
        error: String,
    },
}

/// Any dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Auth-slice action
    Auth(AuthAction),
    /// Form-builder-slice action
    FormBuilder(FormBuilderAction),
}

impl Action {
    /// Stable human-readable label, used for dispatch logging.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auth(action) => match action {
                AuthAction::Login { .. } => "[Auth] Login",
                AuthAction::LoginSuccess { .. } => "[Auth] Login Success",
                AuthAction::LoginFailure { .. } => "[Auth] Login Failure",
                AuthAction::Logout => "[Auth] Logout",
                AuthAction::LogoutSuccess => "[Auth] Logout Success",
                AuthAction::LoadCurrentUser => "[Auth] Load Current User",
                AuthAction::LoadCurrentUserSuccess { .. } => "[Auth] Load Current User Success",
            },
            Self::FormBuilder(action) => match action {
                FormBuilderAction::LoadTemplates => "[Form Builder] Load Templates",
                FormBuilderAction::LoadTemplatesSuccess { .. } => {
                    "[Form Builder] Load Templates Success"
                }
                FormBuilderAction::LoadTemplatesFailure { .. } => {
                    "[Form Builder] Load Templates Failure"
                }
                FormBuilderAction::LoadTemplate { .. } => "[Form Builder] Load Template",
                FormBuilderAction::LoadTemplateSuccess { .. } => {
                    "[Form Builder] Load Template Success"
                }
                FormBuilderAction::LoadTemplateFailure { .. } => {
                    "[Form Builder] Load Template Failure"
                }
                FormBuilderAction::CreateTemplate { .. } => "[Form Builder] Create Template",
                FormBuilderAction::CreateTemplateSuccess { .. } => {
                    "[Form Builder] Create Template Success"
                }
                FormBuilderAction::CreateTemplateFailure { .. } => {
                    "[Form Builder] Create Template Failure"
                }
                FormBuilderAction::UpdateTemplate { .. } => "[Form Builder] Update Template",
                FormBuilderAction::UpdateTemplateSuccess { .. } => {
                    "[Form Builder] Update Template Success"
                }
                FormBuilderAction::UpdateTemplateFailure { .. } => {
                    "[Form Builder] Update Template Failure"
                }
                FormBuilderAction::DeleteTemplate { .. } => "[Form Builder] Delete Template",
                FormBuilderAction::DeleteTemplateSuccess { .. } => {
                    "[Form Builder] Delete Template Success"
                }
                FormBuilderAction::DeleteTemplateFailure { .. } => {
                    "[Form Builder] Delete Template Failure"
                }
                FormBuilderAction::AddField { .. } => "[Form Builder] Add Field",
                FormBuilderAction::UpdateField { .. } => "[Form Builder] Update Field",
                FormBuilderAction::RemoveField { .. } => "[Form Builder] Remove Field",
                FormBuilderAction::ReorderFields { .. } => "[Form Builder] Reorder Fields",
                FormBuilderAction::SubmitForm { .. } => "[Form Builder] Submit Form",
                FormBuilderAction::SubmitFormSuccess { .. } => "[Form Builder] Submit Form Success",
                FormBuilderAction::SubmitFormFailure { .. } => "[Form Builder] Submit Form Failure",
                FormBuilderAction::LoadSubmissions => "[Form Builder] Load Submissions",
                FormBuilderAction::LoadSubmissionsSuccess { .. } => {
                    "[Form Builder] Load Submissions Success"
                }
                FormBuilderAction::LoadSubmissionsFailure { .. } => {
                    "[Form Builder] Load Submissions Failure"
                }
                FormBuilderAction::LoadSubmissionsByTemplate { .. } => {
                    "[Form Builder] Load Submissions By Template"
                }
                FormBuilderAction::LoadSubmissionsByTemplateSuccess { .. } => {
                    "[Form Builder] Load Submissions By Template Success"
                }
                FormBuilderAction::LoadSubmissionsByTemplateFailure { .. } => {
                    "[Form Builder] Load Submissions By Template Failure"
                }
            },
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<FormBuilderAction> for Action {
    fn from(action: FormBuilderAction) -> Self {
        Self::FormBuilder(action)
    }
}
