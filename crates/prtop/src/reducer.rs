use chrono::{DateTime, Local};
use log::{debug, info, warn};

use crate::actions::{Action, FetchAction, GlobalAction, NavigationAction, SessionAction};
use crate::domain_models::{PrData, PrSummary, PrTarget};
use crate::effects::Effect;
use crate::error::FetchError;
use crate::state::{scroll_window, Mode, SessionState};

/// Reducer - pure function that produces new state from current state + action
///
/// Returns the new state and the side effects the driver must run.
pub fn reduce(state: SessionState, action: &Action) -> (SessionState, Vec<Effect>) {
    if state.terminated {
        return (state, Vec::new());
    }

    match action {
        Action::Global(action) => global_reducer(state, action),
        Action::Navigate(action) => (navigation_reducer(state, *action), Vec::new()),
        Action::Session(action) => session_reducer(state, action),
        Action::Fetch(action) => (fetch_reducer(state, action), Vec::new()),
    }
}

fn global_reducer(mut state: SessionState, action: &GlobalAction) -> (SessionState, Vec<Effect>) {
    match action {
        // Translated by KeyboardMiddleware before reaching the reducer
        GlobalAction::KeyPressed(_) => (state, Vec::new()),
        GlobalAction::Resize { width, height } => {
            state.width = *width;
            state.height = *height;
            (state, Vec::new())
        }
        GlobalAction::Quit => {
            info!("Quit requested");
            state.terminated = true;
            (state, vec![Effect::Quit])
        }
    }
}

fn navigation_reducer(mut state: SessionState, action: NavigationAction) -> SessionState {
    let len = state.active_len();
    if len == 0 {
        return state;
    }

    state.selected = match action {
        NavigationAction::Next => (state.selected + 1).min(len - 1),
        NavigationAction::Previous => state.selected.saturating_sub(1),
    };

    adjust_scroll(&mut state);
    state
}

fn session_reducer(mut state: SessionState, action: &SessionAction) -> (SessionState, Vec<Effect>) {
    match action {
        SessionAction::Activate => {
            if state.is_viewing() {
                open_selected_check(state)
            } else {
                match state.selected_pr().map(PrSummary::target) {
                    Some(target) => enter_viewing(state, target),
                    None => (state, Vec::new()),
                }
            }
        }

        SessionAction::Back => {
            if !state.is_viewing() || !state.can_go_back {
                return (state, Vec::new());
            }
            debug!("Returning to PR list");
            state.mode = Mode::Selecting;
            state.selected = 0;
            state.scroll_offset = 0;
            state.pr_data = None;
            state.error = None;
            state.last_updated = None;
            state.loading = true;
            // Invalidate the refresh timer of the session we are leaving
            state.refresh_generation += 1;
            (state, vec![Effect::FetchPrList])
        }

        SessionAction::Refresh => match state.target().cloned() {
            Some(target) => {
                debug!("Manual refresh of {}", target);
                (state, vec![Effect::FetchPrData(target)])
            }
            None => {
                state.loading = true;
                (state, vec![Effect::FetchPrList])
            }
        },

        SessionAction::ToggleSkipped => {
            if state.is_viewing() {
                state.hide_skipped = !state.hide_skipped;
                state.selected = 0;
                state.scroll_offset = 0;
            }
            (state, Vec::new())
        }

        SessionAction::RefreshTick { generation } => {
            let Some(target) = state.target().cloned() else {
                return (state, Vec::new());
            };
            if *generation != state.refresh_generation {
                debug!(
                    "Ignoring stale refresh tick (generation {}, current {})",
                    generation, state.refresh_generation
                );
                return (state, Vec::new());
            }
            let effects = vec![
                Effect::FetchPrData(target),
                Effect::ScheduleRefresh {
                    generation: *generation,
                    interval: state.refresh_interval,
                },
            ];
            (state, effects)
        }
    }
}

fn fetch_reducer(state: SessionState, action: &FetchAction) -> SessionState {
    match action {
        FetchAction::PrListLoaded(result) => pr_list_loaded(state, result),
        FetchAction::PrDataLoaded {
            target,
            result,
            fetched_at,
        } => pr_data_loaded(state, target, result, *fetched_at),
    }
}

fn pr_list_loaded(
    mut state: SessionState,
    result: &Result<Vec<PrSummary>, FetchError>,
) -> SessionState {
    state.loading = false;

    if state.is_viewing() {
        // Only refresh the stored list; the viewed PR owns error and selection
        if let Ok(prs) = result {
            state.prs = prs.clone();
        }
        return state;
    }

    match result {
        Ok(prs) => {
            debug!("Loaded {} open PRs", prs.len());
            state.prs = prs.clone();
            state.error = None;
            state.selected = 0;
            state.scroll_offset = 0;
        }
        Err(err) => {
            warn!("PR list fetch failed: {}", err);
            state.error = Some(err.clone());
        }
    }
    state
}

fn pr_data_loaded(
    mut state: SessionState,
    target: &PrTarget,
    result: &Result<PrData, FetchError>,
    fetched_at: DateTime<Local>,
) -> SessionState {
    if state.target() != Some(target) {
        debug!("Dropping result for {}, not the viewed PR", target);
        return state;
    }

    match result {
        Ok(data) => {
            state.pr_data = Some(data.clone());
            state.error = None;
            state.last_updated = Some(fetched_at);
            let count = state.filtered_count();
            state.selected = state.selected.min(count.saturating_sub(1));
            adjust_scroll(&mut state);
        }
        Err(err) => {
            warn!("Data fetch for {} failed: {}", target, err);
            state.error = Some(err.clone());
        }
    }
    state
}

fn open_selected_check(state: SessionState) -> (SessionState, Vec<Effect>) {
    let url = state
        .selected_check()
        .map(|check| check.details_url.clone())
        .filter(|url| !url.is_empty());

    match url {
        Some(url) => {
            debug!("Opening check details {}", url);
            (state, vec![Effect::OpenUrl(url)])
        }
        None => (state, Vec::new()),
    }
}

/// Enter Viewing for `target`, starting a fresh refresh generation
fn enter_viewing(mut state: SessionState, target: PrTarget) -> (SessionState, Vec<Effect>) {
    info!("Viewing {}", target);
    state.mode = Mode::Viewing(target.clone());
    state.selected = 0;
    state.scroll_offset = 0;
    state.pr_data = None;
    state.error = None;
    state.last_updated = None;
    state.loading = false;
    state.refresh_generation += 1;

    let effects = vec![
        Effect::FetchPrData(target),
        Effect::ScheduleRefresh {
            generation: state.refresh_generation,
            interval: state.refresh_interval,
        },
    ];
    (state, effects)
}

fn adjust_scroll(state: &mut SessionState) {
    state.scroll_offset = scroll_window(
        state.selected,
        state.scroll_offset,
        state.active_len(),
        state.page_len(),
    );
}
