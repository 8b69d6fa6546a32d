//! Wire types for `gh` JSON output
//!
//! These mirror the JSON documents printed by `gh pr view --json` and
//! `gh search prs --json`. They are intentionally separate from the
//! dashboard's domain models: every field is kept as the raw string GitHub
//! reports, and interpretation (status normalization, durations) happens in
//! the consumer.

use serde::{Deserialize, Deserializer, Serialize};

/// GraphQL type name of legacy commit statuses in a check rollup
pub const STATUS_CONTEXT_TYPENAME: &str = "StatusContext";

/// Output of `gh pr view --json statusCheckRollup,title,headRefName,url`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestView {
    /// PR title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// HEAD branch name (e.g., "feature/foo")
    #[serde(default, deserialize_with = "null_as_default")]
    pub head_ref_name: String,

    /// PR URL for opening in browser
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// Check runs and commit statuses reported for the HEAD commit
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_check_rollup: Vec<CheckItem>,
}

/// One entry of a status check rollup
///
/// GitHub mixes two record shapes in the rollup: `CheckRun` (Actions and
/// check-suite apps) and `StatusContext` (the older commit status API).
/// Fields that do not apply to a shape are absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckItem {
    #[serde(rename = "__typename", default, deserialize_with = "null_as_default")]
    pub typename: String,

    /// Check run name (CheckRun only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Status context (StatusContext only, e.g. "ci/jenkins")
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: String,

    /// Run status (e.g. "IN_PROGRESS", "COMPLETED")
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    /// Final result (e.g. "SUCCESS"), empty while running
    #[serde(default, deserialize_with = "null_as_default")]
    pub conclusion: String,

    /// Commit status state (StatusContext only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,

    /// RFC 3339 start timestamp
    #[serde(default, deserialize_with = "null_as_default")]
    pub started_at: String,

    /// RFC 3339 completion timestamp, may be the zero time `0001-01-01T00:00:00Z`
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_at: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub details_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub target_url: String,

    /// Workflow the job belongs to (Actions only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub workflow_name: String,
}

impl CheckItem {
    /// Whether this entry comes from the commit status API
    pub fn is_status_context(&self) -> bool {
        self.typename == STATUS_CONTEXT_TYPENAME
    }
}

/// One result of `gh search prs --json number,title,repository,url,updatedAt`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchedPullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default)]
    pub repository: RepositoryRef,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// ISO-8601 timestamp of the last update
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Repository reference embedded in search results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRef {
    /// "owner/repo"
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_with_owner: String,
}

/// `gh` prints `null` for unset GraphQL fields; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
