//! Domain model for FormKit
//!
//! Shared type definitions used by every other crate:
//! - Form templates, fields, options, and validation rules
//! - Submissions and their typed value bag
//! - Users and roles
//! - The two application state slices (auth, form builder)
//!
//! This crate holds no behavior beyond small constructors and accessors;
//! all mutation logic lives in the store reducers.

pub mod field;
pub mod id;
pub mod state;
pub mod submission;
pub mod template;
pub mod user;

pub use field::{FieldOption, FieldPatch, FieldType, FormField, RuleValue, ValidationRule, ValidationType};
pub use id::generate_id;
pub use state::{AppState, AuthState, FormBuilderState};
pub use submission::{FieldValue, FormSubmission, SubmissionData};
pub use template::{FormTemplate, TemplateDraft, TemplatePatch};
pub use user::{User, UserRole};
