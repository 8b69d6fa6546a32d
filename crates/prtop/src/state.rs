//! Session state
//!
//! The single record the reducer transforms. Created once at startup and
//! owned by the `Store`.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::domain_models::{Check, CheckStatus, PrData, PrSummary, PrTarget};
use crate::effects::Effect;
use crate::error::FetchError;

/// Rows of the Viewing screen that are not check rows
///
/// header, title, branch, blank, summary, blank, table header and footer
pub const VIEWING_CHROME_ROWS: u16 = 8;

/// Rows of the picker above the list: title, subtitle, blank
pub const PICKER_HEADER_ROWS: usize = 3;
/// Repository line, title line and a separating blank
pub const PICKER_ROWS_PER_PR: usize = 3;

/// What the session is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Choosing among the user's open pull requests
    Selecting,
    /// Monitoring the checks of one pull request
    Viewing(PrTarget),
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub mode: Mode,
    pub refresh_interval: Duration,
    /// Last successful check snapshot
    pub pr_data: Option<PrData>,
    pub error: Option<FetchError>,
    /// Index into the PR list (Selecting) or the filtered checks (Viewing)
    pub selected: usize,
    pub scroll_offset: usize,
    pub hide_skipped: bool,
    pub width: u16,
    pub height: u16,
    pub prs: Vec<PrSummary>,
    /// A PR list fetch is in flight
    pub loading: bool,
    /// Whether `Back` may return to the picker
    pub can_go_back: bool,
    /// Refresh ticks carrying any other generation are stale
    pub refresh_generation: u64,
    /// Local time of the last successful data fetch
    pub last_updated: Option<DateTime<Local>>,
    pub terminated: bool,
}

impl SessionState {
    fn new(mode: Mode, refresh_interval: Duration, hide_skipped: bool) -> Self {
        Self {
            mode,
            refresh_interval,
            pr_data: None,
            error: None,
            selected: 0,
            scroll_offset: 0,
            hide_skipped,
            width: 0,
            height: 0,
            prs: Vec::new(),
            loading: false,
            can_go_back: false,
            refresh_generation: 0,
            last_updated: None,
            terminated: false,
        }
    }

    /// Start monitoring `target` directly
    ///
    /// Returns the state plus the first fetch and the refresh timer.
    pub fn viewing(
        target: PrTarget,
        refresh_interval: Duration,
        hide_skipped: bool,
    ) -> (Self, Vec<Effect>) {
        let state = Self::new(Mode::Viewing(target.clone()), refresh_interval, hide_skipped);
        let effects = vec![
            Effect::FetchPrData(target),
            Effect::ScheduleRefresh {
                generation: state.refresh_generation,
                interval: refresh_interval,
            },
        ];
        (state, effects)
    }

    /// Start in the PR picker
    pub fn selecting(refresh_interval: Duration, hide_skipped: bool) -> (Self, Vec<Effect>) {
        let mut state = Self::new(Mode::Selecting, refresh_interval, hide_skipped);
        state.loading = true;
        state.can_go_back = true;
        (state, vec![Effect::FetchPrList])
    }

    /// PR currently being monitored
    pub fn target(&self) -> Option<&PrTarget> {
        match &self.mode {
            Mode::Viewing(target) => Some(target),
            Mode::Selecting => None,
        }
    }

    pub fn is_viewing(&self) -> bool {
        matches!(self.mode, Mode::Viewing(_))
    }

    /// Checks shown as rows, honoring the hide-skipped flag
    pub fn filtered_checks(&self) -> Vec<&Check> {
        self.pr_data
            .iter()
            .flat_map(|data| data.checks.iter())
            .filter(|check| !(self.hide_skipped && check.status == CheckStatus::Skipped))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_checks().len()
    }

    /// Length of the list the selection moves over
    pub fn active_len(&self) -> usize {
        match self.mode {
            Mode::Selecting => self.prs.len(),
            Mode::Viewing(_) => self.filtered_count(),
        }
    }

    /// Number of check rows that fit on screen, at least one
    pub fn visible_rows(&self) -> usize {
        self.height.saturating_sub(VIEWING_CHROME_ROWS).max(1) as usize
    }

    /// Number of picker entries that fit on screen, at least one
    pub fn visible_prs(&self) -> usize {
        let room = (self.height as usize).saturating_sub(PICKER_HEADER_ROWS + 1);
        (room / PICKER_ROWS_PER_PR).max(1)
    }

    /// Entries of the active list that fit on screen
    pub fn page_len(&self) -> usize {
        match self.mode {
            Mode::Selecting => self.visible_prs(),
            Mode::Viewing(_) => self.visible_rows(),
        }
    }

    pub fn selected_check(&self) -> Option<&Check> {
        self.filtered_checks().get(self.selected).copied()
    }

    pub fn selected_pr(&self) -> Option<&PrSummary> {
        self.prs.get(self.selected)
    }

    /// Counts over the unfiltered check list
    pub fn summary(&self) -> CheckSummary {
        let checks = self.pr_data.as_ref().map(|d| d.checks.as_slice()).unwrap_or(&[]);
        CheckSummary::from_checks(checks, self.filtered_count())
    }
}

/// Check counts for the summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub total: usize,
    pub passed: usize,
    pub running: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Checks removed by the hide-skipped filter
    pub hidden: usize,
}

impl CheckSummary {
    pub fn from_checks(checks: &[Check], shown: usize) -> Self {
        let count = |status: CheckStatus| checks.iter().filter(|c| c.status == status).count();
        Self {
            total: checks.len(),
            passed: count(CheckStatus::Pass),
            running: count(CheckStatus::Running),
            failed: count(CheckStatus::Fail),
            skipped: count(CheckStatus::Skipped),
            hidden: checks.len().saturating_sub(shown),
        }
    }
}

/// Scroll offset keeping `selected` inside a window of `visible` rows
///
/// The offset is first clamped to what a list of `len` rows allows, then
/// moved the minimal distance needed to show the selection.
pub fn scroll_window(selected: usize, offset: usize, len: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    let mut offset = offset.min(len.saturating_sub(visible));
    if selected >= offset + visible {
        offset = selected + 1 - visible;
    } else if selected < offset {
        offset = selected;
    }
    offset
}
