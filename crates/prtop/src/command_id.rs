//! Command identifiers
//!
//! Commands are the semantic operations a key can trigger. Bindings refer
//! to them by ID so the key map stays declarative.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, GlobalAction, NavigationAction, SessionAction};

/// The enum is serialized as snake_case (e.g., `ToggleSkipped` -> `"toggle_skipped"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    /// Move the selection down
    NavigateNext,
    /// Move the selection up
    NavigatePrevious,
    /// View the selected PR, or open the selected check in the browser
    Activate,
    /// Return to the PR list
    Back,
    Refresh,
    ToggleSkipped,
    Quit,
}

impl CommandId {
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => NavigationAction::Next.into(),
            Self::NavigatePrevious => NavigationAction::Previous.into(),
            Self::Activate => SessionAction::Activate.into(),
            Self::Back => SessionAction::Back.into(),
            Self::Refresh => SessionAction::Refresh.into(),
            Self::ToggleSkipped => SessionAction::ToggleSkipped.into(),
            Self::Quit => GlobalAction::Quit.into(),
        }
    }
}
