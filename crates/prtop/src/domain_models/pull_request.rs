//! Pull request models

use std::fmt;

use super::check::Check;

/// Identifies one pull request: "owner/repo" plus number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrTarget {
    pub repo: String,
    pub number: u64,
}

impl PrTarget {
    pub fn new(repo: impl Into<String>, number: u64) -> Self {
        Self {
            repo: repo.into(),
            number,
        }
    }
}

impl fmt::Display for PrTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.repo, self.number)
    }
}

/// Snapshot of one pull request's checks
///
/// Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrData {
    pub title: String,
    pub head_ref_name: String,
    pub url: String,
    /// Sorted by status rank, then name
    pub checks: Vec<Check>,
}

/// Entry of the "your open pull requests" list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrSummary {
    /// Repository as "owner/repo"
    pub repo: String,
    pub number: u64,
    pub title: String,
    pub url: String,
    /// ISO-8601 timestamp of the last update
    pub updated_at: String,
}

impl PrSummary {
    pub fn target(&self) -> PrTarget {
        PrTarget::new(self.repo.clone(), self.number)
    }
}
