//! Renderer error type.

/// Errors raised while compiling a template into a runtime form.
#[derive(Debug, thiserror::Error)]
pub enum FormRuntimeError {
    /// A `pattern` rule carries a regex that does not compile
    #[error("invalid pattern on field {field_id}: {source}")]
    InvalidPattern {
        /// Field carrying the rule
        field_id: String,
        /// The regex compile failure
        #[source]
        source: Box<regex::Error>,
    },
}
