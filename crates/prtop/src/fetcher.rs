//! Data fetchers
//!
//! Adapts `prtop_gh` wire records into domain models and collapses every
//! transport error into a `FetchError`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use prtop_gh::{CheckItem, GitHubClient, PullRequestView, SearchedPullRequest};

use crate::domain_models::{
    format_elapsed, parse_timestamp, raw_status, sort_checks, Check, CheckStatus, PrData,
    PrSummary, PrTarget,
};
use crate::error::FetchError;

/// Duration shown for status contexts, which never report timing
const UNKNOWN_DURATION: &str = "???";
/// Duration shown when a check has not started
const NO_DURATION: &str = "-";

/// Fetches pull request lists and check snapshots
#[derive(Clone)]
pub struct PrFetcher {
    client: Arc<dyn GitHubClient>,
    pr_list_limit: usize,
}

impl PrFetcher {
    pub fn new(client: Arc<dyn GitHubClient>, pr_list_limit: usize) -> Self {
        Self {
            client,
            pr_list_limit,
        }
    }

    /// Fetch the user's most recently updated open pull requests
    pub async fn fetch_pr_list(&self) -> Result<Vec<PrSummary>, FetchError> {
        let prs = self
            .client
            .fetch_recent_pull_requests(self.pr_list_limit)
            .await
            .map_err(|e| {
                warn!("Failed to fetch PR list: {:#}", e);
                FetchError::list(e)
            })?;

        Ok(prs.into_iter().map(convert_summary).collect())
    }

    /// Fetch the current check snapshot of one pull request
    pub async fn fetch_pr_data(&self, target: &PrTarget) -> Result<PrData, FetchError> {
        let view = self
            .client
            .fetch_pull_request_checks(&target.repo, target.number)
            .await
            .map_err(|e| {
                warn!("Failed to fetch checks for {}: {:#}", target, e);
                FetchError::data(e)
            })?;

        let data = convert_pull_request(view, Utc::now());
        debug!("{}: {} checks", target, data.checks.len());
        Ok(data)
    }
}

fn convert_summary(pr: SearchedPullRequest) -> PrSummary {
    PrSummary {
        repo: pr.repository.name_with_owner,
        number: pr.number,
        title: pr.title,
        url: pr.url,
        updated_at: pr.updated_at,
    }
}

/// Convert a `gh pr view` document into a sorted snapshot
pub fn convert_pull_request(view: PullRequestView, now: DateTime<Utc>) -> PrData {
    let checks = view
        .status_check_rollup
        .iter()
        .map(|item| convert_check(item, now))
        .collect();

    PrData {
        title: view.title,
        head_ref_name: view.head_ref_name,
        url: view.url,
        checks: sort_checks(checks),
    }
}

/// Convert one rollup entry into a check
pub fn convert_check(item: &CheckItem, now: DateTime<Utc>) -> Check {
    let status = CheckStatus::normalize(raw_status(&item.conclusion, &item.status, &item.state));

    // GitHub reports "0001-01-01T00:00:00Z" for checks that have not finished
    let completed_at = if item.completed_at.starts_with("0001") {
        ""
    } else {
        item.completed_at.as_str()
    };

    let (mut duration, started_at, mut completed) = elapsed(&item.started_at, completed_at, now);

    if item.is_status_context() && status != CheckStatus::Running {
        completed = true;
        duration = UNKNOWN_DURATION.to_string();
    }

    let details_url = if item.details_url.is_empty() {
        item.target_url.clone()
    } else {
        item.details_url.clone()
    };

    Check {
        name: check_name(item),
        status,
        duration,
        details_url,
        started_at,
        completed,
    }
}

fn check_name(item: &CheckItem) -> String {
    let base = [item.name.as_str(), item.context.as_str()]
        .into_iter()
        .find(|name| !name.is_empty())
        .unwrap_or("unknown");

    if item.workflow_name.is_empty() {
        base.to_string()
    } else {
        format!("{} ({})", base, item.workflow_name)
    }
}

/// Returns (duration, start, completed)
fn elapsed(
    started_at: &str,
    completed_at: &str,
    now: DateTime<Utc>,
) -> (String, Option<DateTime<Utc>>, bool) {
    let Some(start) = parse_timestamp(started_at) else {
        return (NO_DURATION.to_string(), None, false);
    };

    match parse_timestamp(completed_at) {
        Some(end) => (format_elapsed((end - start).num_seconds()), Some(start), true),
        None => (format_elapsed((now - start).num_seconds()), Some(start), false),
    }
}
