//! Templates: named, ordered collections of field definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::FormField;

/// A fillable form definition.
///
/// Owned by the form-builder state slice and mutated only through
/// reducer actions; every change produces a new template value. The
/// `order` member of each field is authoritative for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormTemplate {
    /// Template identity
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered field definitions
    pub fields: Vec<FormField>,
    /// User id of the creator
    pub created_by: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
    /// Whether the template is open for submissions
    pub is_active: bool,
}

impl FormTemplate {
    /// Look up a field by id.
    #[must_use]
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// Payload for creating a template; the backend assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDraft {
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered field definitions
    pub fields: Vec<FormField>,
    /// User id of the creator
    pub created_by: String,
    /// Whether the template is open for submissions
    pub is_active: bool,
}

/// Partial update merged into a [`FormTemplate`] by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePatch {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement field list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FormField>>,
    /// New active flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl TemplatePatch {
    /// Merge this patch into `template`, leaving absent members unchanged.
    ///
    /// Does not bump `updated_at`; the backend owns timestamps.
    pub fn apply(&self, template: &mut FormTemplate) {
        if let Some(name) = &self.name {
            template.name = name.clone();
        }
        if let Some(description) = &self.description {
            template.description = Some(description.clone());
        }
        if let Some(fields) = &self.fields {
            template.fields = fields.clone();
        }
        if let Some(is_active) = self.is_active {
            template.is_active = is_active;
        }
    }
}
