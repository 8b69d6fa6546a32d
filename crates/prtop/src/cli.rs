//! Command line interface

use anyhow::{bail, Context, Result};
use clap::Parser;
use regex::Regex;

use crate::domain_models::PrTarget;

/// Owner, repository and number of a github.com pull request URL. Anything
/// after the number ("/checks", "/files", a trailing slash) is ignored.
const PR_URL_PATTERN: &str =
    r"^https?://github\.com/([^/\s]+)/([^/\s]+)/pull/(\d+)(?:[/?#]\S*)?$";

#[derive(Debug, Parser)]
#[command(name = "prtop")]
#[command(
    version,
    about = "Live terminal dashboard for GitHub pull request checks",
    after_help = "EXAMPLES:
    prtop                                           # Pick one of your open PRs
    prtop https://github.com/owner/repo/pull/123    # Watch a PR by URL
    prtop owner/repo 123                            # Watch a PR by repo and number
    prtop --interval 10 owner/repo 123              # Refresh every 10 seconds"
)]
pub struct Cli {
    /// Seconds between automatic refreshes (overrides the config file)
    #[arg(short, long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// A PR URL, or OWNER/REPO followed by a PR number
    #[arg(value_name = "PR", num_args = 0..=2)]
    pub target: Vec<String>,
}

impl Cli {
    /// PR given on the command line; `None` starts the picker
    pub fn pr_target(&self) -> Result<Option<PrTarget>> {
        match self.target.as_slice() {
            [] => Ok(None),
            [url] => parse_pr_url(url).map(Some),
            [repo, number] => parse_repo_and_number(repo, number).map(Some),
            _ => bail!("expected a PR URL or OWNER/REPO PR-NUMBER"),
        }
    }
}

/// Parse `https://github.com/OWNER/REPO/pull/N`
pub fn parse_pr_url(url: &str) -> Result<PrTarget> {
    let pattern = Regex::new(PR_URL_PATTERN).context("invalid PR URL pattern")?;

    let Some(captures) = pattern.captures(url.trim()) else {
        bail!(
            "invalid PR URL: {}\nexpected format: https://github.com/OWNER/REPO/pull/NUMBER",
            url
        );
    };

    parse_repo_and_number(&format!("{}/{}", &captures[1], &captures[2]), &captures[3])
}

/// Parse `OWNER/REPO` and a positive PR number
pub fn parse_repo_and_number(repo: &str, number: &str) -> Result<PrTarget> {
    let valid_repo = matches!(
        repo.split_once('/'),
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
    );
    if !valid_repo {
        bail!("invalid repository: {} (expected OWNER/REPO)", repo);
    }

    let number: u64 = number
        .trim()
        .parse()
        .ok()
        .filter(|n| *n > 0)
        .with_context(|| format!("invalid PR number: {}", number))?;

    Ok(PrTarget::new(repo, number))
}
