//! Actions represent every event the session reacts to.
//! Actions are grouped by scope to indicate which part of the session they affect.

use chrono::{DateTime, Local};
use ratatui::crossterm::event::KeyEvent;

use crate::domain_models::{PrData, PrSummary, PrTarget};
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub enum Action {
    Global(GlobalAction),
    Navigate(NavigationAction),
    Session(SessionAction),
    Fetch(FetchAction),
}

/// Actions not tied to a mode
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Terminal resized
    Resize { width: u16, height: u16 },
    /// Quit the application
    Quit,
}

/// Selection movement within the active list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next item (j, down arrow)
    Next,
    /// Navigate to previous item (k, up arrow)
    Previous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Enter: view the selected PR, or open the selected check's details
    Activate,
    /// Return to the PR picker
    Back,
    /// Manual refresh
    Refresh,
    /// Show or hide skipped checks
    ToggleSkipped,
    /// Refresh timer fired
    RefreshTick { generation: u64 },
}

/// Completion of a background fetch
#[derive(Debug, Clone)]
pub enum FetchAction {
    PrListLoaded(Result<Vec<PrSummary>, FetchError>),
    PrDataLoaded {
        /// PR the data was requested for
        target: PrTarget,
        result: Result<PrData, FetchError>,
        fetched_at: DateTime<Local>,
    },
}

impl From<GlobalAction> for Action {
    fn from(action: GlobalAction) -> Self {
        Self::Global(action)
    }
}

impl From<NavigationAction> for Action {
    fn from(action: NavigationAction) -> Self {
        Self::Navigate(action)
    }
}

impl From<SessionAction> for Action {
    fn from(action: SessionAction) -> Self {
        Self::Session(action)
    }
}

impl From<FetchAction> for Action {
    fn from(action: FetchAction) -> Self {
        Self::Fetch(action)
    }
}
