//! Field definitions: types, options, and validation rules.

use serde::{Deserialize, Serialize};

use crate::submission::FieldValue;

/// Kind of input a field renders as.
///
/// Variants serialize to the exact lower-case wire strings used by
/// previously persisted templates (`"text"`, `"checkbox-group"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input
    Text,
    /// Multi-line text input
    Textarea,
    /// Dropdown with options
    Select,
    /// Single checkbox
    Checkbox,
    /// Radio button group
    Radio,
    /// Date picker
    Date,
    /// Multiple checkboxes sharing one value list
    #[serde(rename = "checkbox-group")]
    CheckboxGroup,
    /// On/off toggle
    Toggle,
    /// Plain button (no captured value)
    Button,
}

impl FieldType {
    /// Whether this field type carries an options list.
    #[inline]
    #[must_use]
    pub fn has_options(self) -> bool {
        matches!(self, Self::Select | Self::Radio | Self::CheckboxGroup)
    }
}

/// One entry of a select/radio/checkbox-group options list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Submitted value
    pub value: String,
    /// Display label
    pub label: String,
}

impl FieldOption {
    /// Create an option from a value/label pair.
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Kind of validation a rule requests.
///
/// Comparison against persisted rules is case-sensitive; the serialized
/// strings are preserved bit-for-bit (`"minlength"`, not `"minLength"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationType {
    /// Non-empty value required
    Required,
    /// String length lower bound
    MinLength,
    /// String length upper bound
    MaxLength,
    /// Regex match
    Pattern,
    /// Numeric lower bound
    Min,
    /// Numeric upper bound
    Max,
    /// Email syntax
    Email,
}

/// Value attached to a validation rule.
///
/// Semantics depend on the rule type: a numeric bound for
/// `min`/`max`/`minlength`/`maxlength`, a regex source for `pattern`,
/// absent for `required`/`email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// Numeric bound
    Number(f64),
    /// Regex source or other textual payload
    Text(String),
}

impl RuleValue {
    /// Numeric view of the value, if it is (or parses as) a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Textual view of the value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for RuleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RuleValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// One validation rule on a field.
///
/// Multiple rules per field are permitted, including duplicates of one
/// type; the runtime renderer lets the last occurrence of a type govern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Rule kind
    #[serde(rename = "type")]
    pub rule_type: ValidationType,
    /// Bound or pattern, when the kind takes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RuleValue>,
    /// User-facing message recorded with the rule
    pub message: String,
}

impl ValidationRule {
    /// Rule without a value (`required`, `email`).
    #[inline]
    #[must_use]
    pub fn new(rule_type: ValidationType, message: impl Into<String>) -> Self {
        Self {
            rule_type,
            value: None,
            message: message.into(),
        }
    }

    /// Rule carrying a bound or pattern.
    #[inline]
    #[must_use]
    pub fn with_value(
        rule_type: ValidationType,
        value: impl Into<RuleValue>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_type,
            value: Some(value.into()),
            message: message.into(),
        }
    }
}

/// One input definition within a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Field identity; submission data is keyed by this id
    pub id: String,
    /// Input kind
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Display label
    pub label: String,
    /// Machine name (slug), unique-ish within a template
    pub name: String,
    /// Whether a value must be supplied
    pub required: bool,
    /// Placeholder text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Help text shown under the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Validation rules, checked in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<ValidationRule>,
    /// Options for select/radio/checkbox-group fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    /// 1-based display position; contiguous after any mutation
    pub order: u32,
    /// Value used when no provided data covers the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<FieldValue>,
    /// Renders greyed-out and is excluded from editing
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

/// Partial update merged into a [`FormField`] by id.
///
/// Absent members leave the corresponding field member untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPatch {
    /// New input kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    /// New label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// New machine name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New required flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// New placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// New help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Replacement rule list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Vec<ValidationRule>>,
    /// Replacement options list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    /// New display position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// New default value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<FieldValue>,
    /// New disabled flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl FieldPatch {
    /// Merge this patch into `field`, leaving absent members unchanged.
    pub fn apply(&self, field: &mut FormField) {
        if let Some(field_type) = self.field_type {
            field.field_type = field_type;
        }
        if let Some(label) = &self.label {
            field.label = label.clone();
        }
        if let Some(name) = &self.name {
            field.name = name.clone();
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(placeholder) = &self.placeholder {
            field.placeholder = Some(placeholder.clone());
        }
        if let Some(help_text) = &self.help_text {
            field.help_text = Some(help_text.clone());
        }
        if let Some(validation) = &self.validation {
            field.validation = validation.clone();
        }
        if let Some(options) = &self.options {
            field.options = options.clone();
        }
        if let Some(order) = self.order {
            field.order = order;
        }
        if let Some(default_value) = &self.default_value {
            field.default_value = Some(default_value.clone());
        }
        if let Some(disabled) = self.disabled {
            field.disabled = disabled;
        }
    }
}

impl From<&FormField> for FieldPatch {
    /// Full-field patch, used when a caller edits a field wholesale.
    fn from(field: &FormField) -> Self {
        Self {
            field_type: Some(field.field_type),
            label: Some(field.label.clone()),
            name: Some(field.name.clone()),
            required: Some(field.required),
            placeholder: field.placeholder.clone(),
            help_text: field.help_text.clone(),
            validation: Some(field.validation.clone()),
            options: Some(field.options.clone()),
            order: Some(field.order),
            default_value: field.default_value.clone(),
            disabled: Some(field.disabled),
        }
    }
}
