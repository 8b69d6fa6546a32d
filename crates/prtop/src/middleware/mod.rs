use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::SessionState;

pub mod keyboard_middleware;
pub mod logging_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current session state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &SessionState, dispatcher: &Dispatcher) -> bool;
}
