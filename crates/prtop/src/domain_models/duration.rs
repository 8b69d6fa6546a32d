//! Time formatting helpers

use chrono::{DateTime, Utc};

/// Format elapsed seconds as "45s" or "2m05s"; negative values clamp to 0
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let minutes = seconds / 60;
    let rest = seconds % 60;
    if minutes > 0 {
        format!("{}m{:02}s", minutes, rest)
    } else {
        format!("{}s", rest)
    }
}

/// Parse an RFC 3339 timestamp
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Describe how long ago `timestamp` was, e.g. "5m ago"
///
/// Returns an empty string when the timestamp cannot be parsed.
pub fn relative_time(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(timestamp) else {
        return String::new();
    };

    let elapsed = now - then;
    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0s");
        assert_eq!(format_elapsed(45), "45s");
        assert_eq!(format_elapsed(90), "1m30s");
        assert_eq!(format_elapsed(155), "2m35s");
        assert_eq!(format_elapsed(3600), "60m00s");
        assert_eq!(format_elapsed(-12), "0s");
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2024-01-01T12:00:00Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());

        let offset = parse_timestamp("2024-01-01T14:00:00+02:00").unwrap();
        assert_eq!(offset, ts);

        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("not-a-date").is_none());
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let ago = |d: Duration| (now - d).to_rfc3339();

        assert_eq!(relative_time(&ago(Duration::seconds(20)), now), "just now");
        assert_eq!(relative_time(&ago(Duration::minutes(5)), now), "5m ago");
        assert_eq!(relative_time(&ago(Duration::hours(2)), now), "2h ago");
        assert_eq!(relative_time(&ago(Duration::days(3)), now), "3d ago");
        assert_eq!(relative_time("invalid", now), "");
    }

    #[test]
    fn test_relative_time_in_the_future_is_just_now() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let future = (now + Duration::minutes(10)).to_rfc3339();
        assert_eq!(relative_time(&future, now), "just now");
    }
}
