//! The state container.

use formkit_model::AppState;
use parking_lot::RwLock;
use tokio::sync::{broadcast, watch};

use crate::action::Action;
use crate::reducer::reduce;

/// Capacity of the action broadcast channel. Effects that fall this far
/// behind drop old actions and log the lag.
const ACTION_CHANNEL_CAPACITY: usize = 64;

/// Exclusive owner of the application state.
///
/// Constructor-injected wherever state is read or written; never a
/// module-level singleton. `dispatch` is the only write entry point:
/// it reduces synchronously under the state lock, then publishes the
/// new state to watchers and the action to the effects stream. Dispatch
/// serialization gives the single-writer property structurally.
pub struct Store {
    state: RwLock<AppState>,
    state_tx: watch::Sender<AppState>,
    action_tx: broadcast::Sender<Action>,
}

impl Store {
    /// Store holding the initial application state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Store holding a caller-supplied starting state.
    #[must_use]
    pub fn with_state(initial: AppState) -> Self {
        let (state_tx, _) = watch::channel(initial.clone());
        let (action_tx, _) = broadcast::channel(ACTION_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(initial),
            state_tx,
            action_tx,
        }
    }

    /// Apply an action and publish the result.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        tracing::debug!(action = action.label(), "dispatch");
        let next = {
            let mut state = self.state.write();
            let next = reduce(&state, &action);
            *state = next.clone();
            next
        };
        self.state_tx.send_replace(next);
        // No receivers is fine: effects may not be running in tests.
        let _ = self.action_tx.send(action);
    }

    /// Run a selector against the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.state.read())
    }

    /// Clone the current state.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver always holds the latest state; rendering surfaces
    /// poll it after each change notification.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state_tx.subscribe()
    }

    /// Subscribe to the dispatched-action stream (used by effects).
    #[must_use]
    pub fn actions(&self) -> broadcast::Receiver<Action> {
        self.action_tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
