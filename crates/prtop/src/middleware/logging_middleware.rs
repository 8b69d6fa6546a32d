use crate::actions::{Action, FetchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::SessionState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &SessionState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Fetch results carry whole snapshots, keep the log readable
            Action::Fetch(FetchAction::PrListLoaded(result)) => {
                log::debug!("Action: PrListLoaded(ok: {})", result.is_ok());
            }
            Action::Fetch(FetchAction::PrDataLoaded { target, result, .. }) => {
                log::debug!("Action: PrDataLoaded({}, ok: {})", target, result.is_ok());
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
