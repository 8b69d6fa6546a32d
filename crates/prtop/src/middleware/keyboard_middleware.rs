use ratatui::crossterm::event::KeyEvent;

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::keymap::Keymap;
use crate::middleware::Middleware;
use crate::state::SessionState;

/// KeyboardMiddleware - converts raw keyboard events to semantic actions
pub struct KeyboardMiddleware {
    keymap: Keymap,
}

impl KeyboardMiddleware {
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap }
    }

    fn handle_key_event(&self, key: &KeyEvent, dispatcher: &Dispatcher) {
        match self.keymap.match_key(key) {
            Some(command) => {
                log::debug!("Key {:?} -> {:?}", key.code, command);
                dispatcher.dispatch(command.to_action());
            }
            None => log::trace!("Unbound key {:?}", key),
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, _state: &SessionState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key_event(key, dispatcher);
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{NavigationAction, SessionAction};
    use crate::keymap::default_keymap;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers)))
    }

    #[test]
    fn test_keys_become_actions() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let (state, _) = SessionState::selecting(Duration::from_secs(5), true);
        let mut middleware = KeyboardMiddleware::new(default_keymap());

        let consumed = !middleware.handle(
            &press(KeyCode::Char('j'), KeyModifiers::NONE),
            &state,
            &dispatcher,
        );
        middleware.handle(&press(KeyCode::Esc, KeyModifiers::NONE), &state, &dispatcher);
        middleware.handle(&press(KeyCode::Char('x'), KeyModifiers::NONE), &state, &dispatcher);

        assert!(consumed);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Navigate(NavigationAction::Next))
        ));
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Session(SessionAction::Back))
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let (state, _) = SessionState::selecting(Duration::from_secs(5), true);
        let mut middleware = KeyboardMiddleware::new(default_keymap());

        assert!(middleware.handle(&Action::Global(GlobalAction::Quit), &state, &dispatcher));
        assert!(rx.try_recv().is_err());
    }
}
