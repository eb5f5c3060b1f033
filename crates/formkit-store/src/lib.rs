//! State container for FormKit
//!
//! A unidirectional action/reducer/effect store:
//! - [`Action`] — closed catalog of state-transition requests
//! - [`reducer`] — pure, total functions mapping (state, action) to the
//!   next state
//! - [`Store`] — the single owner of [`AppState`](formkit_model::AppState);
//!   dispatch is the only write entry point
//! - [`effects`] — async orchestrators bridging request actions to the
//!   backend and back to success/failure actions
//! - [`selectors`] — pure read projections
//! - [`guards`] — navigation gates over the auth slice
//!
//! Dispatch reduces synchronously under the state lock, then publishes
//! the new state on a watch channel and the action on a broadcast
//! channel. There is no parallel writer: the single-writer property is
//! structural.

pub mod action;
pub mod effects;
pub mod guards;
pub mod reducer;
pub mod selectors;
pub mod store;

pub use action::{Action, AuthAction, FormBuilderAction};
pub use effects::{AuthEffects, FormBuilderEffects};
pub use guards::{admin_guard, auth_guard, role_guard};
pub use reducer::{auth_reducer, form_builder_reducer, reduce};
pub use store::Store;
