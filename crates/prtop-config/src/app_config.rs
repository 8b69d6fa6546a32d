//! Application configuration
//!
//! Configuration loaded from `.prtop.toml`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shortest refresh interval accepted, in seconds
pub const MIN_REFRESH_INTERVAL_SECS: u64 = 1;

/// Application configuration loaded from `.prtop.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seconds between automatic check refreshes
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Whether skipped checks start out hidden
    #[serde(default = "default_hide_skipped")]
    pub hide_skipped: bool,

    /// Number of recent pull requests offered in the picker
    #[serde(default = "default_pr_list_limit")]
    pub pr_list_limit: usize,

    /// Program used to talk to GitHub
    #[serde(default = "default_gh_command")]
    pub gh_command: String,
}

fn default_refresh_interval_secs() -> u64 {
    5
}

fn default_hide_skipped() -> bool {
    true
}

fn default_pr_list_limit() -> usize {
    5
}

fn default_gh_command() -> String {
    "gh".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
            hide_skipped: default_hide_skipped(),
            pr_list_limit: default_pr_list_limit(),
            gh_command: default_gh_command(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::from_toml(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse config file content, falling back to defaults on error
    pub fn from_toml(content: &str) -> Self {
        match toml::from_str::<AppConfig>(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config.normalized()
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }

    /// Override the refresh interval (e.g. from the command line)
    pub fn with_refresh_interval_secs(mut self, secs: u64) -> Self {
        self.refresh_interval_secs = secs;
        self.normalized()
    }

    /// Refresh interval as a `Duration`, never below one second
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(MIN_REFRESH_INTERVAL_SECS))
    }

    fn normalized(mut self) -> Self {
        if self.refresh_interval_secs < MIN_REFRESH_INTERVAL_SECS {
            log::warn!(
                "refresh_interval_secs = {} is too small, using {}",
                self.refresh_interval_secs,
                MIN_REFRESH_INTERVAL_SECS
            );
            self.refresh_interval_secs = MIN_REFRESH_INTERVAL_SECS;
        }
        self
    }
}
