//! One live input of a compiled form.

use formkit_model::{FieldValue, FormField};

use crate::error::FormRuntimeError;
use crate::messages;
use crate::validate::{CompiledValidators, ValidationFailure};

/// One control: current value, touched flag, and validators.
///
/// Disabled controls are exempt from validation and excluded from the
/// emitted submission data, matching the reactive-forms semantics
/// templates were authored against.
#[derive(Debug)]
pub struct FormControl {
    field_id: String,
    value: FieldValue,
    disabled: bool,
    touched: bool,
    validators: CompiledValidators,
}

impl FormControl {
    /// Build the control for `field`.
    ///
    /// Initial value resolution: provided data, else the field's
    /// default, else null. Enabled only when the form is editable and
    /// the field is not disabled.
    ///
    /// # Errors
    /// Propagates validator compilation failures.
    pub fn compile(
        field: &FormField,
        provided: Option<&FieldValue>,
        is_editable: bool,
    ) -> Result<Self, FormRuntimeError> {
        let value = provided
            .cloned()
            .or_else(|| field.default_value.clone())
            .unwrap_or(FieldValue::Null);
        Ok(Self {
            field_id: field.id.clone(),
            value,
            disabled: !is_editable || field.disabled,
            touched: false,
            validators: CompiledValidators::compile(field)?,
        })
    }

    /// Field id this control answers for.
    #[inline]
    #[must_use]
    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Replace the value and mark the control touched.
    pub fn set_value(&mut self, value: FieldValue) {
        self.value = value;
        self.touched = true;
    }

    /// Whether the control is greyed out.
    #[inline]
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the user has interacted with the control (or a failed
    /// submit marked it).
    #[inline]
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Mark the control touched so its errors render.
    pub fn touch(&mut self) {
        self.touched = true;
    }

    /// Every failed check on the current value; empty when disabled.
    #[must_use]
    pub fn errors(&self) -> Vec<ValidationFailure> {
        if self.disabled {
            return Vec::new();
        }
        self.validators.check(&self.value)
    }

    /// Whether the current value passes every check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// The single message shown under the control, when invalid.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        messages::error_message(&self.errors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_test_utils::{required_text_field, text_field};
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_value_prefers_provided_over_default() {
        let mut field = text_field("f", "Field");
        field.default_value = Some(FieldValue::Text("default".into()));

        let provided = FieldValue::Text("provided".into());
        let control = FormControl::compile(&field, Some(&provided), true).unwrap();
        assert_eq!(control.value(), &provided);

        let control = FormControl::compile(&field, None, true).unwrap();
        assert_eq!(control.value(), &FieldValue::Text("default".into()));

        let bare = text_field("f", "Field");
        let control = FormControl::compile(&bare, None, true).unwrap();
        assert_eq!(control.value(), &FieldValue::Null);
    }

    #[test]
    fn non_editable_forms_disable_every_control() {
        let field = text_field("f", "Field");
        let control = FormControl::compile(&field, None, false).unwrap();
        assert!(control.is_disabled());

        let mut disabled_field = text_field("f", "Field");
        disabled_field.disabled = true;
        let control = FormControl::compile(&disabled_field, None, true).unwrap();
        assert!(control.is_disabled());
    }

    #[test]
    fn disabled_controls_are_exempt_from_validation() {
        let mut field = required_text_field("f", "Field");
        field.disabled = true;
        let control = FormControl::compile(&field, None, true).unwrap();
        assert!(control.errors().is_empty());
        assert!(control.is_valid());
    }

    #[test]
    fn set_value_touches_the_control() {
        let field = text_field("f", "Field");
        let mut control = FormControl::compile(&field, None, true).unwrap();
        assert!(!control.is_touched());
        control.set_value(FieldValue::Text("x".into()));
        assert!(control.is_touched());
    }

    #[test]
    fn error_message_surfaces_the_top_failure() {
        let field = required_text_field("f", "Field");
        let control = FormControl::compile(&field, None, true).unwrap();
        assert_eq!(control.error_message().as_deref(), Some("This field is required"));
    }
}
