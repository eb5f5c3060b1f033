//! Rule-list to runtime-validator translation.

use formkit_model::{FieldValue, FormField, ValidationType};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FormRuntimeError;

/// Simplified email syntax: something@something.something, no spaces.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// One failed check on a control's value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationFailure {
    /// Value absent but required
    Required,
    /// String/list shorter than the bound
    MinLength {
        /// Required minimum length
        required: usize,
        /// Observed length
        actual: usize,
    },
    /// String/list longer than the bound
    MaxLength {
        /// Permitted maximum length
        required: usize,
        /// Observed length
        actual: usize,
    },
    /// Numeric value below the bound
    Min {
        /// Lower bound
        min: f64,
    },
    /// Numeric value above the bound
    Max {
        /// Upper bound
        max: f64,
    },
    /// Value does not match the pattern
    Pattern,
    /// Value is not a plausible email address
    Email,
}

/// Runtime validator set for one field.
///
/// Built once per field at compile time. Duplicate rules of one type
/// overwrite: the last occurrence governs. Rule values of the wrong
/// shape (e.g. a textual `minlength` bound that is not numeric) are
/// ignored.
#[derive(Debug, Default)]
pub struct CompiledValidators {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
    pattern: Option<Regex>,
    email: bool,
}

impl CompiledValidators {
    /// Translate a field's `required` flag and rule list.
    ///
    /// # Errors
    /// [`FormRuntimeError::InvalidPattern`] when a `pattern` rule's
    /// regex does not compile.
    pub fn compile(field: &FormField) -> Result<Self, FormRuntimeError> {
        let mut validators = Self {
            required: field.required,
            ..Self::default()
        };
        for rule in &field.validation {
            let number = rule.value.as_ref().and_then(|v| v.as_number());
            match rule.rule_type {
                ValidationType::Required => validators.required = true,
                ValidationType::MinLength => {
                    if let Some(bound) = number {
                        validators.min_length = Some(bound as usize);
                    }
                }
                ValidationType::MaxLength => {
                    if let Some(bound) = number {
                        validators.max_length = Some(bound as usize);
                    }
                }
                ValidationType::Min => validators.min = number.or(validators.min),
                ValidationType::Max => validators.max = number.or(validators.max),
                ValidationType::Pattern => {
                    if let Some(source) = rule.value.as_ref().and_then(|v| v.as_text()) {
                        validators.pattern = Some(compile_anchored(source).map_err(|source| {
                            FormRuntimeError::InvalidPattern {
                                field_id: field.id.clone(),
                                source: Box::new(source),
                            }
                        })?);
                    }
                }
                ValidationType::Email => validators.email = true,
            }
        }
        Ok(validators)
    }

    /// Check a value, returning every failure in priority order.
    ///
    /// An empty value fails only `required`; the remaining validators
    /// skip it so optional fields stay optional.
    #[must_use]
    pub fn check(&self, value: &FieldValue) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        if value.is_empty() {
            if self.required {
                failures.push(ValidationFailure::Required);
            }
            return failures;
        }

        if let Some(actual) = value.len() {
            if let Some(required) = self.min_length {
                if actual < required {
                    failures.push(ValidationFailure::MinLength { required, actual });
                }
            }
            if let Some(required) = self.max_length {
                if actual > required {
                    failures.push(ValidationFailure::MaxLength { required, actual });
                }
            }
        }

        if let Some(number) = value.as_number() {
            if let Some(min) = self.min {
                if number < min {
                    failures.push(ValidationFailure::Min { min });
                }
            }
            if let Some(max) = self.max {
                if number > max {
                    failures.push(ValidationFailure::Max { max });
                }
            }
        }

        if let Some(text) = textual(value) {
            if let Some(pattern) = &self.pattern {
                if !pattern.is_match(&text) {
                    failures.push(ValidationFailure::Pattern);
                }
            }
            if self.email && !EMAIL_RE.is_match(&text) {
                failures.push(ValidationFailure::Email);
            }
        }

        failures
    }
}

/// Textual rendering used by the pattern and email validators.
fn textual(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(s) => Some(s.clone()),
        FieldValue::Number(n) => Some(n.to_string()),
        FieldValue::Bool(_) | FieldValue::List(_) | FieldValue::Null => None,
    }
}

/// Compile a pattern with implicit full-match anchoring, matching the
/// behavior templates were authored against.
fn compile_anchored(source: &str) -> Result<Regex, regex::Error> {
    let mut anchored = String::with_capacity(source.len() + 2);
    if !source.starts_with('^') {
        anchored.push('^');
    }
    anchored.push_str(source);
    if !source.ends_with('$') {
        anchored.push('$');
    }
    Regex::new(&anchored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_model::{ValidationRule, ValidationType};
    use formkit_test_utils::{field_with_rules, required_text_field, text_field};
    use pretty_assertions::assert_eq;

    fn rules(field_rules: Vec<ValidationRule>) -> CompiledValidators {
        CompiledValidators::compile(&field_with_rules("f", "Field", field_rules)).unwrap()
    }

    #[test]
    fn required_flag_and_rule_both_require() {
        let from_flag = CompiledValidators::compile(&required_text_field("f", "Field")).unwrap();
        assert_eq!(from_flag.check(&FieldValue::Null), vec![ValidationFailure::Required]);

        let from_rule = rules(vec![ValidationRule::new(ValidationType::Required, "req")]);
        assert_eq!(
            from_rule.check(&FieldValue::Text(String::new())),
            vec![ValidationFailure::Required]
        );
        assert!(from_rule.check(&FieldValue::Text("x".into())).is_empty());
    }

    #[test]
    fn false_is_a_present_value() {
        let validators = rules(vec![ValidationRule::new(ValidationType::Required, "req")]);
        assert!(validators.check(&FieldValue::Bool(false)).is_empty());
    }

    #[test]
    fn length_bounds_skip_empty_values() {
        let validators = rules(vec![ValidationRule::with_value(
            ValidationType::MinLength,
            5.0,
            "too short",
        )]);
        assert!(validators.check(&FieldValue::Null).is_empty());
        assert!(validators.check(&FieldValue::Text(String::new())).is_empty());
        assert_eq!(
            validators.check(&FieldValue::Text("abc".into())),
            vec![ValidationFailure::MinLength { required: 5, actual: 3 }]
        );
        assert!(validators.check(&FieldValue::Text("abcdef".into())).is_empty());
    }

    #[test]
    fn length_bounds_count_list_items() {
        let validators = rules(vec![ValidationRule::with_value(
            ValidationType::MaxLength,
            2.0,
            "too many",
        )]);
        let three = FieldValue::List(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(
            validators.check(&three),
            vec![ValidationFailure::MaxLength { required: 2, actual: 3 }]
        );
    }

    #[test]
    fn numeric_bounds_coerce_numeric_strings() {
        let validators = rules(vec![ValidationRule::with_value(ValidationType::Min, 18.0, "min")]);
        assert_eq!(
            validators.check(&FieldValue::Number(17.0)),
            vec![ValidationFailure::Min { min: 18.0 }]
        );
        assert_eq!(
            validators.check(&FieldValue::Text("17".into())),
            vec![ValidationFailure::Min { min: 18.0 }]
        );
        assert!(validators.check(&FieldValue::Number(18.0)).is_empty());
        // non-numeric text is not the min validator's business
        assert!(validators.check(&FieldValue::Text("abc".into())).is_empty());
    }

    #[test]
    fn pattern_is_anchored_full_match() {
        let validators = rules(vec![ValidationRule::with_value(
            ValidationType::Pattern,
            r"[0-9]{3}",
            "three digits",
        )]);
        assert!(validators.check(&FieldValue::Text("123".into())).is_empty());
        assert_eq!(
            validators.check(&FieldValue::Text("1234".into())),
            vec![ValidationFailure::Pattern]
        );
        assert_eq!(
            validators.check(&FieldValue::Text("x123".into())),
            vec![ValidationFailure::Pattern]
        );
    }

    #[test]
    fn invalid_pattern_is_a_compile_error() {
        let field = field_with_rules(
            "f",
            "Field",
            vec![ValidationRule::with_value(ValidationType::Pattern, "(", "broken")],
        );
        let err = CompiledValidators::compile(&field).unwrap_err();
        assert!(err.to_string().contains("invalid pattern on field f"));
    }

    #[test]
    fn email_checks_syntax_and_skips_empty() {
        let validators = rules(vec![ValidationRule::new(ValidationType::Email, "email")]);
        assert!(validators.check(&FieldValue::Text("admin@example.com".into())).is_empty());
        assert_eq!(
            validators.check(&FieldValue::Text("not-an-email".into())),
            vec![ValidationFailure::Email]
        );
        assert!(validators.check(&FieldValue::Null).is_empty());
    }

    #[test]
    fn last_duplicate_rule_governs() {
        let validators = rules(vec![
            ValidationRule::with_value(ValidationType::MinLength, 2.0, "first"),
            ValidationRule::with_value(ValidationType::MinLength, 5.0, "second"),
        ]);
        // four characters satisfy the first bound but not the second
        assert_eq!(
            validators.check(&FieldValue::Text("abcd".into())),
            vec![ValidationFailure::MinLength { required: 5, actual: 4 }]
        );
    }

    #[test]
    fn ill_typed_rule_values_are_ignored() {
        let validators = rules(vec![ValidationRule::with_value(
            ValidationType::MinLength,
            "not a number",
            "broken",
        )]);
        assert!(validators.check(&FieldValue::Text("x".into())).is_empty());
    }

    #[test]
    fn multiple_failures_are_all_reported() {
        let field = {
            let mut field = text_field("f", "Field");
            field.validation = vec![
                ValidationRule::with_value(ValidationType::MinLength, 10.0, "len"),
                ValidationRule::with_value(ValidationType::Pattern, "[a-z]+", "lower"),
            ];
            field
        };
        let validators = CompiledValidators::compile(&field).unwrap();
        let failures = validators.check(&FieldValue::Text("ABC".into()));
        assert_eq!(failures.len(), 2);
    }
}
