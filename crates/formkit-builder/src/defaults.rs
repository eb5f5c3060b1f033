//! Type-specific defaults for newly created fields.

use formkit_model::{generate_id, FieldOption, FieldType, FormField};

/// Palette entries in display order.
#[must_use]
pub fn palette() -> [FieldType; 8] {
    [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::CheckboxGroup,
        FieldType::Date,
        FieldType::Button,
    ]
}

/// Default label for a palette entry.
///
/// Types without a palette entry fall back to "New Field".
#[must_use]
pub fn default_label(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Text => "Text Field",
        FieldType::Textarea => "Text Area",
        FieldType::Select => "Dropdown",
        FieldType::Checkbox => "Checkbox",
        FieldType::Radio => "Radio Group",
        FieldType::Date => "Date",
        FieldType::Button => "Button",
        FieldType::CheckboxGroup => "Checkbox Group",
        FieldType::Toggle => "New Field",
    }
}

/// Default machine name: slug of the default label plus a random
/// 4-character suffix, so repeated drops of one palette entry stay
/// distinguishable.
#[must_use]
pub fn default_name(field_type: FieldType) -> String {
    let base = default_label(field_type).to_lowercase().replace(' ', "_");
    let suffix: String = generate_id().chars().take(4).collect();
    format!("{base}_{suffix}")
}

/// Default options: exactly three for option-carrying types, none
/// otherwise.
#[must_use]
pub fn default_options(field_type: FieldType) -> Vec<FieldOption> {
    if field_type.has_options() {
        vec![
            FieldOption::new("option1", "Option 1"),
            FieldOption::new("option2", "Option 2"),
            FieldOption::new("option3", "Option 3"),
        ]
    } else {
        Vec::new()
    }
}

/// Build a fresh field of `field_type` at display position `order`.
#[must_use]
pub fn new_field(field_type: FieldType, order: u32) -> FormField {
    FormField {
        id: generate_id(),
        field_type,
        label: default_label(field_type).to_string(),
        name: default_name(field_type),
        required: false,
        placeholder: None,
        help_text: None,
        validation: Vec::new(),
        options: default_options(field_type),
        order,
        default_value: None,
        disabled: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_types_get_exactly_three_defaults() {
        for field_type in [FieldType::Select, FieldType::Radio, FieldType::CheckboxGroup] {
            let options = default_options(field_type);
            assert_eq!(options.len(), 3);
            assert_eq!(options[0].value, "option1");
            assert_eq!(options[2].label, "Option 3");
        }
        assert!(default_options(FieldType::Text).is_empty());
    }

    #[test]
    fn names_are_slugs_with_a_suffix() {
        let name = default_name(FieldType::Textarea);
        let (base, suffix) = name.rsplit_once('_').unwrap();
        assert_eq!(base, "text_area");
        assert_eq!(suffix.len(), 4);
    }

    #[test]
    fn new_fields_start_optional_and_unvalidated() {
        let field = new_field(FieldType::Select, 3);
        assert!(!field.required);
        assert!(field.validation.is_empty());
        assert_eq!(field.order, 3);
        assert_eq!(field.label, "Dropdown");
        assert_eq!(field.id.len(), 9);
    }
}
