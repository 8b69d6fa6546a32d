//! Check model
//!
//! The canonical four-state status vocabulary and the ordering used to
//! display checks.

use chrono::{DateTime, Utc};
use strum::Display;

use super::duration::format_elapsed;

/// Canonical status of a check
///
/// Variant order is display priority: unfinished and failing work sorts
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum CheckStatus {
    Running,
    Fail,
    Pass,
    Skipped,
}

impl CheckStatus {
    /// Map an upstream status, conclusion or state string to a canonical status
    ///
    /// Matching ignores case and surrounding whitespace. Empty and unknown
    /// values are treated as still running.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "SUCCESS" | "PASS" => Self::Pass,
            "FAILURE" | "FAIL" | "ERROR" | "TIMED_OUT" | "ACTION_REQUIRED" | "STARTUP_FAILURE" => {
                Self::Fail
            }
            "SKIPPED" | "CANCELLED" | "NEUTRAL" | "STALE" => Self::Skipped,
            // IN_PROGRESS, RUNNING, PENDING, QUEUED, WAITING, REQUESTED, "" and anything else
            _ => Self::Running,
        }
    }

    /// Sort rank (Running=0 .. Skipped=3)
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// Pick the field that carries a record's status
///
/// The conclusion is authoritative; the raw status and then the state are
/// fallbacks. Returns the first non-empty value, or "" when all are empty.
pub fn raw_status<'a>(conclusion: &'a str, status: &'a str, state: &'a str) -> &'a str {
    [conclusion, status, state]
        .into_iter()
        .find(|value| !value.trim().is_empty())
        .unwrap_or("")
}

/// One monitored check of a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Display name, optionally qualified with its workflow
    pub name: String,
    pub status: CheckStatus,
    /// Precomputed duration ("1m30s", "-" or "???")
    pub duration: String,
    /// Link to the check's details page, may be empty
    pub details_url: String,
    pub started_at: Option<DateTime<Utc>>,
    pub completed: bool,
}

impl Check {
    /// Duration to display at `now`
    ///
    /// Incomplete checks with a known start show live elapsed time.
    pub fn display_duration(&self, now: DateTime<Utc>) -> String {
        match self.started_at {
            Some(started) if !self.completed => {
                format_elapsed((now - started).num_seconds())
            }
            _ => self.duration.clone(),
        }
    }
}

/// Order checks by status rank, then name
pub fn sort_checks(mut checks: Vec<Check>) -> Vec<Check> {
    checks.sort_by(|a, b| {
        a.status
            .rank()
            .cmp(&b.status.rank())
            .then_with(|| a.name.cmp(&b.name))
    });
    checks
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn check(name: &str, status: CheckStatus) -> Check {
        Check {
            name: name.to_string(),
            status,
            duration: "1m00s".to_string(),
            details_url: format!("https://example.com/{}", name),
            started_at: None,
            completed: true,
        }
    }

    #[test]
    fn test_normalize_mapping_table() {
        let table = [
            ("SUCCESS", CheckStatus::Pass),
            ("PASS", CheckStatus::Pass),
            ("FAILURE", CheckStatus::Fail),
            ("FAIL", CheckStatus::Fail),
            ("ERROR", CheckStatus::Fail),
            ("TIMED_OUT", CheckStatus::Fail),
            ("ACTION_REQUIRED", CheckStatus::Fail),
            ("STARTUP_FAILURE", CheckStatus::Fail),
            ("IN_PROGRESS", CheckStatus::Running),
            ("RUNNING", CheckStatus::Running),
            ("PENDING", CheckStatus::Running),
            ("QUEUED", CheckStatus::Running),
            ("WAITING", CheckStatus::Running),
            ("REQUESTED", CheckStatus::Running),
            ("SKIPPED", CheckStatus::Skipped),
            ("CANCELLED", CheckStatus::Skipped),
            ("NEUTRAL", CheckStatus::Skipped),
            ("STALE", CheckStatus::Skipped),
        ];
        for (raw, expected) in table {
            assert_eq!(CheckStatus::normalize(raw), expected, "raw = {}", raw);
        }
    }

    #[test]
    fn test_normalize_unknown_and_empty_are_running() {
        assert_eq!(CheckStatus::normalize(""), CheckStatus::Running);
        assert_eq!(CheckStatus::normalize("   "), CheckStatus::Running);
        assert_eq!(CheckStatus::normalize("COMPLETED"), CheckStatus::Running);
        assert_eq!(CheckStatus::normalize("bogus"), CheckStatus::Running);
    }

    #[test]
    fn test_normalize_ignores_case_and_whitespace() {
        assert_eq!(CheckStatus::normalize("  SUCCESS  "), CheckStatus::Pass);
        assert_eq!(CheckStatus::normalize("success"), CheckStatus::Pass);
        assert_eq!(CheckStatus::normalize("\tTimed_Out\n"), CheckStatus::Fail);
    }

    #[test]
    fn test_raw_status_precedence() {
        assert_eq!(raw_status("SUCCESS", "COMPLETED", "PENDING"), "SUCCESS");
        assert_eq!(raw_status("", "IN_PROGRESS", "PENDING"), "IN_PROGRESS");
        assert_eq!(raw_status("", "", "FAILURE"), "FAILURE");
        assert_eq!(raw_status("", "", ""), "");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(CheckStatus::Running.to_string(), "RUNNING");
        assert_eq!(CheckStatus::Fail.to_string(), "FAIL");
        assert_eq!(CheckStatus::Pass.to_string(), "PASS");
        assert_eq!(CheckStatus::Skipped.to_string(), "SKIPPED");
    }

    #[test]
    fn test_sort_by_rank_then_name() {
        let sorted = sort_checks(vec![
            check("zebra", CheckStatus::Pass),
            check("alpha", CheckStatus::Pass),
            check("beta", CheckStatus::Fail),
        ]);
        let names: Vec<_> = sorted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["beta", "alpha", "zebra"]);
    }

    #[test]
    fn test_sort_puts_running_first_and_skipped_last() {
        let sorted = sort_checks(vec![
            check("skip", CheckStatus::Skipped),
            check("build", CheckStatus::Pass),
            check("lint", CheckStatus::Fail),
            check("deploy", CheckStatus::Running),
        ]);
        let names: Vec<_> = sorted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["deploy", "lint", "build", "skip"]);
    }

    #[test]
    fn test_live_duration_for_incomplete_check() {
        let started = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 2, 5).unwrap();
        let mut running = check("deploy", CheckStatus::Running);
        running.started_at = Some(started);
        running.completed = false;
        running.duration = "0s".to_string();

        assert_eq!(running.display_duration(now), "2m05s");

        running.completed = true;
        assert_eq!(running.display_duration(now), "0s");
    }
}
