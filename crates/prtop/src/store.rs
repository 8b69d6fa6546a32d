use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::effects::Effect;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::SessionState;

/// Store - holds the session state and runs the middleware/reducer loop
pub struct Store {
    state: SessionState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
}

impl Store {
    pub fn new(initial_state: SessionState, dispatcher: Dispatcher) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    ///
    /// Returns the effects the reducer requested.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return Vec::new();
            }
        }

        let (state, effects) = reduce(self.state.clone(), &action);
        self.state = state;
        effects
    }
}
