//! `gh`-based GitHub client
//!
//! Implements `GitHubClient` by invoking the `gh` command line tool and
//! decoding its JSON output. `gh` owns authentication and host
//! configuration, so this client carries no credentials.

use crate::client::GitHubClient;
use crate::runner::{CommandOutput, CommandRunner, TokioCommandRunner};
use crate::types::{PullRequestView, SearchedPullRequest};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use std::sync::Arc;

const PR_VIEW_FIELDS: &str = "statusCheckRollup,title,headRefName,url";
const PR_SEARCH_FIELDS: &str = "number,title,repository,url,updatedAt";

/// GitHub client that shells out to `gh`
#[derive(Clone)]
pub struct GhCliClient {
    program: String,
    runner: Arc<dyn CommandRunner>,
}

impl std::fmt::Debug for GhCliClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhCliClient")
            .field("program", &self.program)
            .finish()
    }
}

impl GhCliClient {
    /// Create a client running the given program with real processes
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_runner(program, Arc::new(TokioCommandRunner))
    }

    /// Create a client with a custom process runner
    pub fn with_runner(program: impl Into<String>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// Check that the program can be started at all (`gh --version`)
    pub async fn ensure_available(&self) -> anyhow::Result<()> {
        let args = vec!["--version".to_string()];
        let output = self
            .runner
            .run(&self.program, &args)
            .await
            .with_context(|| format!("'{}' CLI not found on PATH", self.program))?;

        if !output.success {
            return Err(anyhow!(
                "'{}' CLI is not usable: {}",
                self.program,
                output.stderr_text()
            ));
        }
        Ok(())
    }

    async fn run_json<T: DeserializeOwned>(&self, args: Vec<String>) -> anyhow::Result<T> {
        debug!("Running {} {}", self.program, args.join(" "));

        let output = self
            .runner
            .run(&self.program, &args)
            .await
            .map_err(|e| anyhow!("gh CLI error: {}", e))?;

        parse_output(&output)
    }
}

fn parse_output<T: DeserializeOwned>(output: &CommandOutput) -> anyhow::Result<T> {
    if !output.success {
        return Err(anyhow!("gh CLI error: {}", output.stderr_text()));
    }

    serde_json::from_slice(&output.stdout).map_err(|e| anyhow!("failed to parse gh output: {}", e))
}

#[async_trait]
impl GitHubClient for GhCliClient {
    async fn fetch_recent_pull_requests(
        &self,
        limit: usize,
    ) -> anyhow::Result<Vec<SearchedPullRequest>> {
        let args = vec![
            "search".to_string(),
            "prs".to_string(),
            "--author=@me".to_string(),
            "--state=open".to_string(),
            "--sort=updated".to_string(),
            "--limit".to_string(),
            limit.to_string(),
            "--json".to_string(),
            PR_SEARCH_FIELDS.to_string(),
        ];

        let prs: Vec<SearchedPullRequest> = self.run_json(args).await?;
        debug!("Fetched {} open PRs", prs.len());
        Ok(prs)
    }

    async fn fetch_pull_request_checks(
        &self,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequestView> {
        let args = vec![
            "pr".to_string(),
            "view".to_string(),
            pr_number.to_string(),
            "--repo".to_string(),
            repo.to_string(),
            "--json".to_string(),
            PR_VIEW_FIELDS.to_string(),
        ];

        let view: PullRequestView = self.run_json(args).await?;
        debug!(
            "Fetched {} checks for {}#{}",
            view.status_check_rollup.len(),
            repo,
            pr_number
        );
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Runner returning a fixed result and recording every invocation
    struct FakeRunner {
        result: Mutex<Option<std::io::Result<CommandOutput>>>,
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl FakeRunner {
        fn new(result: std::io::Result<CommandOutput>) -> Arc<Self> {
            Arc::new(Self {
                result: Mutex::new(Some(result)),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec()));
            self.result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(CommandOutput::ok("")))
        }
    }

    fn client(runner: Arc<FakeRunner>) -> GhCliClient {
        GhCliClient::with_runner("gh", runner)
    }

    #[tokio::test]
    async fn test_fetch_recent_pull_requests() {
        let json = r#"[
            {"number":42,"title":"Add feature","repository":{"nameWithOwner":"owner/repo"},"url":"https://github.com/owner/repo/pull/42","updatedAt":"2024-01-01T00:00:00Z"},
            {"number":99,"title":"Fix bug","repository":{"nameWithOwner":"other/project"},"url":"https://github.com/other/project/pull/99","updatedAt":"2024-01-02T00:00:00Z"}
        ]"#;
        let runner = FakeRunner::new(Ok(CommandOutput::ok(json)));

        let prs = client(runner.clone())
            .fetch_recent_pull_requests(5)
            .await
            .unwrap();

        assert_eq!(prs.len(), 2);
        assert_eq!(prs[0].number, 42);
        assert_eq!(prs[0].repository.name_with_owner, "owner/repo");
        assert_eq!(prs[1].title, "Fix bug");

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "gh");
        assert_eq!(&calls[0].1[..2], &["search".to_string(), "prs".to_string()]);
        assert!(calls[0].1.contains(&"--author=@me".to_string()));
        assert!(calls[0].1.contains(&"5".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_recent_pull_requests_empty() {
        let runner = FakeRunner::new(Ok(CommandOutput::ok("[]")));

        let prs = client(runner).fetch_recent_pull_requests(5).await.unwrap();

        assert!(prs.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_pull_request_checks_arguments() {
        let json = r#"{"title":"My PR","headRefName":"feature","url":"u","statusCheckRollup":[]}"#;
        let runner = FakeRunner::new(Ok(CommandOutput::ok(json)));

        let view = client(runner.clone())
            .fetch_pull_request_checks("owner/repo", 7)
            .await
            .unwrap();

        assert_eq!(view.title, "My PR");
        assert_eq!(view.head_ref_name, "feature");
        let calls = runner.calls();
        assert_eq!(
            calls[0].1,
            vec![
                "pr".to_string(),
                "view".to_string(),
                "7".to_string(),
                "--repo".to_string(),
                "owner/repo".to_string(),
                "--json".to_string(),
                PR_VIEW_FIELDS.to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_non_zero_exit_reports_stderr() {
        let runner = FakeRunner::new(Ok(CommandOutput::failed("gh: not logged in\n")));

        let err = client(runner)
            .fetch_recent_pull_requests(5)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "gh CLI error: gh: not logged in");
    }

    #[tokio::test]
    async fn test_invalid_json_reports_parse_failure() {
        let runner = FakeRunner::new(Ok(CommandOutput::ok("{invalid json")));

        let err = client(runner)
            .fetch_pull_request_checks("o/r", 1)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("failed to parse gh output"));
    }

    #[tokio::test]
    async fn test_spawn_failure_is_reported() {
        let runner = FakeRunner::new(Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        )));

        let err = client(runner)
            .fetch_pull_request_checks("o/r", 1)
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("gh CLI error:"));
    }

    #[tokio::test]
    async fn test_ensure_available() {
        let ok = FakeRunner::new(Ok(CommandOutput::ok("gh version 2.40.0")));
        assert!(client(ok.clone()).ensure_available().await.is_ok());
        assert_eq!(ok.calls()[0].1, vec!["--version".to_string()]);

        let missing = FakeRunner::new(Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "not found",
        )));
        let err = client(missing).ensure_available().await.unwrap_err();
        assert!(err.to_string().contains("not found on PATH"));
    }

    #[tokio::test]
    async fn test_configured_program_is_invoked() {
        let runner = FakeRunner::new(Ok(CommandOutput::ok("[]")));
        let client = GhCliClient::with_runner("/opt/bin/gh-wrapper", runner.clone());

        client.fetch_recent_pull_requests(3).await.unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/opt/bin/gh-wrapper");
    }
}
