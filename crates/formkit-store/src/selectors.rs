//! Pure read projections over the application state.
//!
//! Used through [`Store::select`](crate::Store::select):
//! `store.select(selectors::is_admin)`.

use formkit_model::{AppState, FormField, FormSubmission, FormTemplate, User, UserRole};

/// The signed-in user, when any.
#[must_use]
pub fn current_user(state: &AppState) -> Option<User> {
    state.auth.user.clone()
}

/// Whether a user is signed in.
#[must_use]
pub fn is_authenticated(state: &AppState) -> bool {
    state.auth.is_authenticated
}

/// Whether the signed-in user is an admin.
#[must_use]
pub fn is_admin(state: &AppState) -> bool {
    state.auth.user.as_ref().is_some_and(User::is_admin)
}

/// Whether the signed-in user holds the plain user role.
#[must_use]
pub fn is_user(state: &AppState) -> bool {
    state
        .auth
        .user
        .as_ref()
        .is_some_and(|u| u.has_role(UserRole::User))
}

/// Whether an auth request is in flight.
#[must_use]
pub fn auth_loading(state: &AppState) -> bool {
    state.auth.is_loading
}

/// Last auth failure message.
#[must_use]
pub fn auth_error(state: &AppState) -> Option<String> {
    state.auth.error.clone()
}

/// Every known template.
#[must_use]
pub fn all_templates(state: &AppState) -> Vec<FormTemplate> {
    state.form_builder.templates.clone()
}

/// One template by id.
#[must_use]
pub fn template_by_id<'a>(state: &'a AppState, id: &str) -> Option<&'a FormTemplate> {
    state.form_builder.templates.iter().find(|t| t.id == id)
}

/// The template being edited or filled, when any.
#[must_use]
pub fn current_template(state: &AppState) -> Option<FormTemplate> {
    state.form_builder.current_template.clone()
}

/// Fields of the current template, empty when none is set.
#[must_use]
pub fn current_template_fields(state: &AppState) -> Vec<FormField> {
    state
        .form_builder
        .current_template
        .as_ref()
        .map(|t| t.fields.clone())
        .unwrap_or_default()
}

/// Every loaded submission.
#[must_use]
pub fn all_submissions(state: &AppState) -> Vec<FormSubmission> {
    state.form_builder.submissions.clone()
}

/// Loaded submissions recorded against one template.
#[must_use]
pub fn submissions_by_template(state: &AppState, template_id: &str) -> Vec<FormSubmission> {
    state
        .form_builder
        .submissions
        .iter()
        .filter(|s| s.form_template_id == template_id)
        .cloned()
        .collect()
}

/// Whether a form-builder request is in flight.
#[must_use]
pub fn builder_loading(state: &AppState) -> bool {
    state.form_builder.is_loading
}

/// Last form-builder failure message.
#[must_use]
pub fn builder_error(state: &AppState) -> Option<String> {
    state.form_builder.error.clone()
}
