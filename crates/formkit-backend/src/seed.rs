//! Built-in demo data: the contact form template and the two demo users.

use chrono::{TimeZone, Utc};
use formkit_model::{
    FieldType, FormField, FormTemplate, User, UserRole, ValidationRule, ValidationType,
};

/// The demo "Contact Form" template (id `"1"`).
#[must_use]
pub fn contact_form_template() -> FormTemplate {
    let seeded_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    FormTemplate {
        id: "1".to_string(),
        name: "Contact Form".to_string(),
        description: Some("A simple contact form".to_string()),
        fields: vec![
            FormField {
                id: "field1".to_string(),
                field_type: FieldType::Text,
                label: "Full Name".to_string(),
                name: "fullName".to_string(),
                required: true,
                placeholder: Some("Enter your full name".to_string()),
                help_text: None,
                validation: vec![
                    ValidationRule::new(ValidationType::Required, "Full name is required"),
                    ValidationRule::with_value(
                        ValidationType::MinLength,
                        2.0,
                        "Name must be at least 2 characters",
                    ),
                ],
                options: vec![],
                order: 1,
                default_value: None,
                disabled: false,
            },
            FormField {
                id: "field3".to_string(),
                field_type: FieldType::Textarea,
                label: "Message".to_string(),
                name: "message".to_string(),
                required: true,
                placeholder: Some("Enter your message".to_string()),
                help_text: None,
                validation: vec![
                    ValidationRule::new(ValidationType::Required, "Message is required"),
                    ValidationRule::with_value(
                        ValidationType::MinLength,
                        10.0,
                        "Message must be at least 10 characters",
                    ),
                ],
                options: vec![],
                order: 3,
                default_value: None,
                disabled: false,
            },
        ],
        created_by: "1".to_string(),
        created_at: seeded_at,
        updated_at: seeded_at,
        is_active: true,
    }
}

/// The demo users: `admin` (id `"1"`) and `user` (id `"2"`).
#[must_use]
pub fn mock_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
        },
        User {
            id: "2".to_string(),
            username: "user".to_string(),
            email: "user@example.com".to_string(),
            role: UserRole::User,
        },
    ]
}
