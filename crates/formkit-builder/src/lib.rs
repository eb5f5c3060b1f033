//! Form builder interpreter
//!
//! Turns palette selections and drag/drop gestures into an ordered
//! draft field list. The draft is local to the editing session: store
//! dispatches are auxiliary notifications, and the parent receives the
//! full list after every mutation so save flows always see the latest
//! draft.

pub mod defaults;
pub mod session;

pub use defaults::{default_label, default_name, default_options, new_field, palette};
pub use session::BuilderSession;
