//! Backend error type.

/// Errors raised by backend operations.
///
/// The `Display` strings are user-facing: failure actions carry them
/// verbatim into the state slices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// No template with the requested id
    #[error("Template not found")]
    TemplateNotFound,

    /// Username/password pair rejected
    #[error("Invalid credentials")]
    InvalidCredentials,
}
