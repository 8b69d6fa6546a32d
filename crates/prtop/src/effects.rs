//! Side effects requested by the reducer
//!
//! The reducer never performs I/O. It returns these commands alongside the
//! new state and the `EffectRunner` executes them.

use std::time::Duration;

use crate::domain_models::PrTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the user's open pull requests
    FetchPrList,
    /// Fetch the check snapshot of one pull request
    FetchPrData(PrTarget),
    /// Dispatch a `RefreshTick` carrying `generation` after `interval`
    ScheduleRefresh { generation: u64, interval: Duration },
    /// Open a URL in the browser
    OpenUrl(String),
    /// Stop the application
    Quit,
}
