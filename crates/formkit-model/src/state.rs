//! Application state slices.
//!
//! The store exclusively owns both slices; other components read via
//! selectors and write only by dispatching actions.

use serde::{Deserialize, Serialize};

use crate::submission::FormSubmission;
use crate::template::FormTemplate;
use crate::user::User;

/// Authentication slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// Current user, when signed in
    pub user: Option<User>,
    /// Whether a user is signed in
    pub is_authenticated: bool,
    /// Whether an auth request is in flight
    pub is_loading: bool,
    /// Last auth failure message
    pub error: Option<String>,
}

/// Form-builder slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormBuilderState {
    /// Known templates
    pub templates: Vec<FormTemplate>,
    /// Template being edited or filled, when any
    pub current_template: Option<FormTemplate>,
    /// Loaded submissions
    pub submissions: Vec<FormSubmission>,
    /// Whether a form-builder request is in flight
    pub is_loading: bool,
    /// Last form-builder failure message
    pub error: Option<String>,
}

/// Process-wide application state.
///
/// Initialized at application start; the auth slice resets to its
/// initial value on logout. Lives for the page session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Authentication slice
    pub auth: AuthState,
    /// Form-builder slice
    pub form_builder: FormBuilderState,
}
