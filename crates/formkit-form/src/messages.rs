//! Failed-rule set to human string.

use crate::validate::ValidationFailure;

/// Derive the single message shown under a control.
///
/// Pure: first match wins in priority order required > minlength >
/// maxlength > min > max > pattern > email, with a generic fallback.
/// Returns `None` for a clean control.
#[must_use]
pub fn error_message(failures: &[ValidationFailure]) -> Option<String> {
    let top = failures.iter().min_by_key(|failure| priority(failure))?;
    Some(render(top))
}

fn priority(failure: &ValidationFailure) -> u8 {
    match failure {
        ValidationFailure::Required => 0,
        ValidationFailure::MinLength { .. } => 1,
        ValidationFailure::MaxLength { .. } => 2,
        ValidationFailure::Min { .. } => 3,
        ValidationFailure::Max { .. } => 4,
        ValidationFailure::Pattern => 5,
        ValidationFailure::Email => 6,
    }
}

fn render(failure: &ValidationFailure) -> String {
    match failure {
        ValidationFailure::Required => "This field is required".to_string(),
        ValidationFailure::MinLength { required, .. } => {
            format!("Minimum length is {required} characters")
        }
        ValidationFailure::MaxLength { required, .. } => {
            format!("Maximum length is {required} characters")
        }
        ValidationFailure::Min { min } => format!("Minimum value is {min}"),
        ValidationFailure::Max { max } => format!("Maximum value is {max}"),
        ValidationFailure::Pattern => "Invalid format".to_string(),
        ValidationFailure::Email => "Invalid email address".to_string(),
    }
}
