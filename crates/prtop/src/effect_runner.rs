//! Effect runner
//!
//! Executes the effects returned by the reducer. Every effect runs as a
//! detached tokio task; results come back as actions through the
//! `Dispatcher`, so the store stays the only writer of the session state.

use chrono::Local;
use log::debug;

use crate::actions::{FetchAction, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::effects::Effect;
use crate::fetcher::PrFetcher;
use crate::utils::browser;

pub struct EffectRunner {
    fetcher: PrFetcher,
    dispatcher: Dispatcher,
}

impl EffectRunner {
    pub fn new(fetcher: PrFetcher, dispatcher: Dispatcher) -> Self {
        Self {
            fetcher,
            dispatcher,
        }
    }

    pub fn run_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    /// Start one effect without waiting for it
    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::FetchPrList => {
                let fetcher = self.fetcher.clone();
                let dispatcher = self.dispatcher.clone();
                tokio::spawn(async move {
                    let result = fetcher.fetch_pr_list().await;
                    dispatcher.dispatch(FetchAction::PrListLoaded(result));
                });
            }
            Effect::FetchPrData(target) => {
                let fetcher = self.fetcher.clone();
                let dispatcher = self.dispatcher.clone();
                tokio::spawn(async move {
                    let result = fetcher.fetch_pr_data(&target).await;
                    dispatcher.dispatch(FetchAction::PrDataLoaded {
                        target,
                        result,
                        fetched_at: Local::now(),
                    });
                });
            }
            Effect::ScheduleRefresh {
                generation,
                interval,
            } => {
                let dispatcher = self.dispatcher.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(interval).await;
                    dispatcher.dispatch(SessionAction::RefreshTick { generation });
                });
            }
            Effect::OpenUrl(url) => {
                tokio::spawn(browser::open_url(url));
            }
            Effect::Quit => debug!("Quit effect, main loop will exit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::domain_models::PrTarget;
    use async_trait::async_trait;
    use prtop_gh::{CheckItem, GitHubClient, PullRequestView, SearchedPullRequest};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    struct FakeClient;

    #[async_trait]
    impl GitHubClient for FakeClient {
        async fn fetch_recent_pull_requests(
            &self,
            _limit: usize,
        ) -> anyhow::Result<Vec<SearchedPullRequest>> {
            anyhow::bail!("gh CLI error: offline")
        }

        async fn fetch_pull_request_checks(
            &self,
            _repo: &str,
            _pr_number: u64,
        ) -> anyhow::Result<PullRequestView> {
            Ok(PullRequestView {
                title: "Title".to_string(),
                status_check_rollup: vec![CheckItem {
                    name: "build".to_string(),
                    conclusion: "SUCCESS".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            })
        }
    }

    fn runner() -> (EffectRunner, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let fetcher = PrFetcher::new(Arc::new(FakeClient), 5);
        (EffectRunner::new(fetcher, Dispatcher::new(tx)), rx)
    }

    #[tokio::test]
    async fn test_fetch_data_reports_target() {
        let (runner, mut rx) = runner();

        runner.run(Effect::FetchPrData(PrTarget::new("o/r", 3)));

        match rx.recv().await {
            Some(Action::Fetch(FetchAction::PrDataLoaded { target, result, .. })) => {
                assert_eq!(target, PrTarget::new("o/r", 3));
                assert_eq!(result.unwrap().checks.len(), 1);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_list_reports_error() {
        let (runner, mut rx) = runner();

        runner.run(Effect::FetchPrList);

        match rx.recv().await {
            Some(Action::Fetch(FetchAction::PrListLoaded(Err(err)))) => {
                assert_eq!(err.to_string(), "gh CLI error: offline");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_schedule_refresh_dispatches_tick() {
        let (runner, mut rx) = runner();

        runner.run(Effect::ScheduleRefresh {
            generation: 4,
            interval: Duration::from_millis(10),
        });

        match rx.recv().await {
            Some(Action::Session(SessionAction::RefreshTick { generation })) => {
                assert_eq!(generation, 4);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }
}
