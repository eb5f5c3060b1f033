//! Submissions and the typed value bag they carry.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mapping from field id to submitted value.
pub type SubmissionData = HashMap<String, FieldValue>;

/// A value captured for one field.
///
/// A closed variant set standing in for an untyped value bag. The
/// untagged representation keeps previously serialized submissions
/// readable: `null`, booleans, numbers, strings, and string lists map
/// onto the matching variant. Dates travel as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value
    Null,
    /// Checkbox / toggle state
    Bool(bool),
    /// Numeric input
    Number(f64),
    /// Text, date, select, or radio value
    Text(String),
    /// Checkbox-group selections
    List(Vec<String>),
}

impl FieldValue {
    /// Whether the value counts as absent for `required` checks.
    ///
    /// `false` is a present value; only null, the empty string, and an
    /// empty list are absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// Numeric view, coercing numeric strings the way the runtime does.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Character count for string values, item count for lists.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.chars().count()),
            Self::List(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Textual view of the value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Null
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// The recorded result of filling out a template.
///
/// Created once at submit time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    /// Submission identity
    pub id: String,
    /// Template this submission answers
    pub form_template_id: String,
    /// Template name at submit time (denormalized)
    pub form_template_name: String,
    /// Field id to value
    pub data: SubmissionData,
    /// User id of the submitter, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
    /// Submit timestamp
    pub submitted_at: DateTime<Utc>,
}
