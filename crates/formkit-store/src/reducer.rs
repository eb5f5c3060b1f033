//! Pure reducers for both state slices.
//!
//! Reducers are total: every action maps to a next state, no I/O, no
//! panics. Each family follows one contract:
//! - request: `is_loading = true`; data untouched; prior error kept
//!   except on login
//! - success: `is_loading = false`, `error = None`, data merged
//! - failure: `is_loading = false`, `error = Some(message)`, data
//!   untouched
//!
//! Field-level actions operate on the current template only and are
//! no-ops when none is set. Whenever the current template changes, the
//! matching entry in `templates` is replaced with the same new value so
//! the two never diverge for one id.

use formkit_model::{AppState, AuthState, FormBuilderState, FormTemplate};

use crate::action::{Action, AuthAction, FormBuilderAction};

/// Compute the next auth slice.
#[must_use]
pub fn auth_reducer(state: &AuthState, action: &AuthAction) -> AuthState {
    match action {
        AuthAction::Login { .. } => AuthState {
            is_loading: true,
            error: None,
            ..state.clone()
        },
        AuthAction::LoginSuccess { user } => AuthState {
            user: Some(user.clone()),
            is_authenticated: true,
            is_loading: false,
            error: None,
        },
        AuthAction::LoginFailure { error } => AuthState {
            is_loading: false,
            error: Some(error.clone()),
            ..state.clone()
        },
        AuthAction::Logout => AuthState {
            is_loading: true,
            ..state.clone()
        },
        AuthAction::LogoutSuccess => AuthState::default(),
        // Restore is resolved by the orchestrator; the request itself
        // does not toggle the loading flag.
        AuthAction::LoadCurrentUser => state.clone(),
        AuthAction::LoadCurrentUserSuccess { user } => AuthState {
            user: Some(user.clone()),
            is_authenticated: true,
            ..state.clone()
        },
    }
}

/// Compute the next form-builder slice.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn form_builder_reducer(state: &FormBuilderState, action: &FormBuilderAction) -> FormBuilderState {
    use FormBuilderAction as A;
    match action {
        A::LoadTemplates
        | A::LoadTemplate { .. }
        | A::CreateTemplate { .. }
        | A::UpdateTemplate { .. }
        | A::DeleteTemplate { .. }
        | A::SubmitForm { .. }
        | A::LoadSubmissions
        | A::LoadSubmissionsByTemplate { .. } => FormBuilderState {
            is_loading: true,
            ..state.clone()
        },

        A::LoadTemplatesSuccess { templates } => FormBuilderState {
            templates: templates.clone(),
            is_loading: false,
            error: None,
            ..state.clone()
        },
        A::LoadTemplateSuccess { template } => FormBuilderState {
            current_template: Some(template.clone()),
            is_loading: false,
            error: None,
            ..state.clone()
        },
        A::CreateTemplateSuccess { template } => {
            let mut templates = state.templates.clone();
            templates.push(template.clone());
            FormBuilderState {
                templates,
                current_template: Some(template.clone()),
                is_loading: false,
                error: None,
                ..state.clone()
            }
        }
        A::UpdateTemplateSuccess { template } => FormBuilderState {
            templates: replace_by_id(&state.templates, template),
            current_template: Some(template.clone()),
            is_loading: false,
            error: None,
            ..state.clone()
        },
        A::DeleteTemplateSuccess { id } => FormBuilderState {
            templates: state
                .templates
                .iter()
                .filter(|t| t.id != *id)
                .cloned()
                .collect(),
            current_template: state
                .current_template
                .as_ref()
                .filter(|current| current.id != *id)
                .cloned(),
            is_loading: false,
            error: None,
            ..state.clone()
        },
        A::SubmitFormSuccess { submission } => {
            let mut submissions = state.submissions.clone();
            submissions.push(submission.clone());
            FormBuilderState {
                submissions,
                is_loading: false,
                error: None,
                ..state.clone()
            }
        }
        A::LoadSubmissionsSuccess { submissions }
        | A::LoadSubmissionsByTemplateSuccess { submissions } => FormBuilderState {
            submissions: submissions.clone(),
            is_loading: false,
            error: None,
            ..state.clone()
        },

        A::LoadTemplatesFailure { error }
        | A::LoadTemplateFailure { error }
        | A::CreateTemplateFailure { error }
        | A::UpdateTemplateFailure { error }
        | A::DeleteTemplateFailure { error }
        | A::SubmitFormFailure { error }
        | A::LoadSubmissionsFailure { error }
        | A::LoadSubmissionsByTemplateFailure { error } => FormBuilderState {
            is_loading: false,
            error: Some(error.clone()),
            ..state.clone()
        },

        A::AddField { field } => with_current_template(state, |template| {
            template.fields.push(field.clone());
        }),
        A::UpdateField { id, patch } => with_current_template(state, |template| {
            if let Some(existing) = template.fields.iter_mut().find(|f| f.id == *id) {
                patch.apply(existing);
            }
        }),
        A::RemoveField { id } => with_current_template(state, |template| {
            template.fields.retain(|f| f.id != *id);
        }),
        A::ReorderFields { fields } => with_current_template(state, |template| {
            template.fields = fields.clone();
        }),
    }
}

/// Compute the next application state.
#[must_use]
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    match action {
        Action::Auth(action) => AppState {
            auth: auth_reducer(&state.auth, action),
            form_builder: state.form_builder.clone(),
        },
        Action::FormBuilder(action) => AppState {
            auth: state.auth.clone(),
            form_builder: form_builder_reducer(&state.form_builder, action),
        },
    }
}

/// Apply `edit` to a copy of the current template, then mirror the new
/// value into `templates` (sync invariant). No-op without a current
/// template.
fn with_current_template(
    state: &FormBuilderState,
    edit: impl FnOnce(&mut FormTemplate),
) -> FormBuilderState {
    let Some(current) = &state.current_template else {
        return state.clone();
    };
    let mut template = current.clone();
    edit(&mut template);
    FormBuilderState {
        templates: replace_by_id(&state.templates, &template),
        current_template: Some(template),
        ..state.clone()
    }
}

fn replace_by_id(templates: &[FormTemplate], updated: &FormTemplate) -> Vec<FormTemplate> {
    templates
        .iter()
        .map(|t| if t.id == updated.id { updated.clone() } else { t.clone() })
        .collect()
}
