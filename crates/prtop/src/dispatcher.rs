//! Dispatcher for feeding actions back into the store
//!
//! Background work (input thread, fetch tasks, refresh timers) and
//! middleware never touch the state directly. They send actions through a
//! `Dispatcher`, and the main loop applies them one at a time in arrival
//! order.

use tokio::sync::mpsc::UnboundedSender;

use crate::actions::Action;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the main loop
    ///
    /// Sending only fails once the main loop has exited, so the action is
    /// dropped.
    pub fn dispatch(&self, action: impl Into<Action>) {
        if let Err(e) = self.action_tx.send(action.into()) {
            log::debug!("Dispatcher: main loop gone, dropping {:?}", e.0);
        }
    }

    /// Whether the main loop has stopped receiving
    pub fn is_closed(&self) -> bool {
        self.action_tx.is_closed()
    }
}
