//! View Models
//!
//! Pre-compute everything the views draw. Building a view model is a pure
//! function of the session state, the theme and the current time, so the
//! screen contents are testable without a terminal.

pub mod checks_view_model;
pub mod line;
pub mod pr_list_view_model;

use chrono::{DateTime, Local};

pub use line::{truncate, ViewLine};

use crate::state::{Mode, SessionState};
use crate::theme::Theme;

/// Everything drawn on one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenViewModel {
    /// Lines from the top of the screen
    pub body: Vec<ViewLine>,
    /// Key hints pinned to the last row
    pub footer: Option<ViewLine>,
}

impl ScreenViewModel {
    pub fn from_state(state: &SessionState, theme: &Theme, now: DateTime<Local>) -> Self {
        if state.width == 0 {
            return Self {
                body: vec![ViewLine::styled("Loading...", theme.text())],
                footer: None,
            };
        }

        let screen = match &state.mode {
            Mode::Selecting => pr_list_view_model::build(state, theme, now),
            Mode::Viewing(target) => checks_view_model::build(state, target, theme, now),
        };
        screen.truncated(state.width as usize)
    }

    fn truncated(self, width: usize) -> Self {
        Self {
            body: self.body.into_iter().map(|l| l.truncated(width)).collect(),
            footer: self.footer.map(|l| l.truncated(width)),
        }
    }
}

#[cfg(test)]
impl ScreenViewModel {
    /// Plain text of the body, one entry per line
    pub fn body_text(&self) -> Vec<String> {
        self.body.iter().map(ViewLine::text).collect()
    }

    pub fn footer_text(&self) -> Option<String> {
        self.footer.as_ref().map(ViewLine::text)
    }
}

/// Hint shown under error banners and empty results
fn retry_hint(can_go_back: bool) -> &'static str {
    if can_go_back {
        "r: retry | esc: back | q: quit"
    } else {
        "r: retry | q: quit"
    }
}
