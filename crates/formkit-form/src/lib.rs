//! Runtime form renderer
//!
//! Compiles a [`FormTemplate`](formkit_model::FormTemplate) into a live
//! set of validated controls and turns user input back into structured
//! submission data:
//! - [`validate`] — translates a field's `required` flag and rule list
//!   into runtime validators
//! - [`control`] — one input's value, touched flag, and failures
//! - [`runtime`] — the compiled form: values, validity, submit/cancel
//! - [`messages`] — failed-rule set to human string, in priority order

pub mod control;
pub mod error;
pub mod messages;
pub mod runtime;
pub mod validate;

pub use control::FormControl;
pub use error::FormRuntimeError;
pub use messages::error_message;
pub use runtime::{FormRuntime, RendererConfig, SubmitOutcome};
pub use validate::{CompiledValidators, ValidationFailure};
