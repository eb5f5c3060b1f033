//! Testing utilities for the FormKit workspace
//!
//! Shared fixtures: users, fields, templates, and submissions.

#![allow(missing_docs)]

use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use formkit_model::{
    FieldOption, FieldType, FieldValue, FormField, FormSubmission, FormTemplate, User, UserRole,
    ValidationRule, ValidationType,
};

pub fn admin_user() -> User {
    User {
        id: "1".to_string(),
        username: "admin".to_string(),
        email: "admin@example.com".to_string(),
        role: UserRole::Admin,
    }
}

pub fn regular_user() -> User {
    User {
        id: "2".to_string(),
        username: "user".to_string(),
        email: "user@example.com".to_string(),
        role: UserRole::User,
    }
}

pub fn text_field(id: &str, label: &str) -> FormField {
    FormField {
        id: id.to_string(),
        field_type: FieldType::Text,
        label: label.to_string(),
        name: label.to_lowercase().replace(' ', "_"),
        required: false,
        placeholder: None,
        help_text: None,
        validation: vec![],
        options: vec![],
        order: 1,
        default_value: None,
        disabled: false,
    }
}

pub fn required_text_field(id: &str, label: &str) -> FormField {
    let mut field = text_field(id, label);
    field.required = true;
    field
}

pub fn field_with_rules(id: &str, label: &str, rules: Vec<ValidationRule>) -> FormField {
    let mut field = text_field(id, label);
    field.validation = rules;
    field
}

pub fn min_rule(bound: f64) -> ValidationRule {
    ValidationRule::with_value(ValidationType::Min, bound, format!("Must be at least {bound}"))
}

pub fn select_field(id: &str, label: &str, option_values: &[&str]) -> FormField {
    let mut field = text_field(id, label);
    field.field_type = FieldType::Select;
    field.options = option_values
        .iter()
        .map(|v| FieldOption::new(*v, v.to_uppercase()))
        .collect();
    field
}

pub fn template_named(id: &str, name: &str) -> FormTemplate {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    FormTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        fields: vec![],
        created_by: "1".to_string(),
        created_at,
        updated_at: created_at,
        is_active: true,
    }
}

pub fn template_with_fields(id: &str, name: &str, fields: Vec<FormField>) -> FormTemplate {
    let mut template = template_named(id, name);
    template.fields = fields;
    template
}

pub fn submission_for(template_id: &str, template_name: &str) -> FormSubmission {
    let mut data = HashMap::new();
    data.insert("field1".to_string(), FieldValue::Text("John Doe".to_string()));
    FormSubmission {
        id: "sub1".to_string(),
        form_template_id: template_id.to_string(),
        form_template_name: template_name.to_string(),
        data,
        submitted_by: Some("2".to_string()),
        submitted_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
    }
}
