//! GitHub client trait
//!
//! Defines the interface the dashboard uses to reach GitHub. The only
//! production implementation is `GhCliClient`, but keeping the seam lets the
//! session be exercised against fakes.

use crate::types::{PullRequestView, SearchedPullRequest};
use async_trait::async_trait;

/// GitHub client trait
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// by every fetch task the dashboard spawns.
///
/// # Example
///
/// ```rust,ignore
/// use prtop_gh::GitHubClient;
///
/// async fn titles(client: &dyn GitHubClient) -> anyhow::Result<Vec<String>> {
///     let prs = client.fetch_recent_pull_requests(5).await?;
///     Ok(prs.into_iter().map(|pr| pr.title).collect())
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch the authenticated user's open pull requests, most recently
    /// updated first
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of pull requests to return
    async fn fetch_recent_pull_requests(
        &self,
        limit: usize,
    ) -> anyhow::Result<Vec<SearchedPullRequest>>;

    /// Fetch title, branch, URL and the check rollup of one pull request
    ///
    /// # Arguments
    ///
    /// * `repo` - Repository as "owner/repo"
    /// * `pr_number` - Pull request number
    async fn fetch_pull_request_checks(
        &self,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequestView>;
}
