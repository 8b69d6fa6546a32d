//! GitHub pull request data fetched through the `gh` command line tool
//!
//! This crate provides a trait-based client for the two queries the
//! dashboard needs: the user's recent open pull requests, and the check
//! rollup of a single pull request. Authentication, host selection and
//! pagination are delegated to `gh` itself.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_recent_pull_requests()                  │
//! │  - fetch_pull_request_checks()                   │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐        ┌────────────────────┐
//!              │  GhCliClient    │───────►│  CommandRunner     │
//!              │  (JSON parsing) │        │  (process spawn)   │
//!              └─────────────────┘        └────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use prtop_gh::{GhCliClient, GitHubClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GhCliClient::new("gh");
//! let view = client.fetch_pull_request_checks("owner/repo", 42).await?;
//! println!("{} has {} checks", view.title, view.status_check_rollup.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod gh_cli_client;
pub mod runner;
pub mod types;

pub use client::GitHubClient;
pub use gh_cli_client::GhCliClient;
pub use runner::{CommandOutput, CommandRunner, TokioCommandRunner};
pub use types::{CheckItem, PullRequestView, RepositoryRef, SearchedPullRequest};
