//! Staleness evaluation
//!
//! Classifies the most recent scrobble against the configured threshold.
//! Pure: the current time is passed in.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use scrobblewatch_lastfm_client::ScrobbleEvent;

/// Outcome of a single freshness check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Last scrobble is within the threshold
    Fresh,
    /// Last scrobble is older than the threshold
    Stale,
    /// No completed scrobble could be obtained
    NoData,
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresh => write!(f, "fresh"),
            Self::Stale => write!(f, "stale"),
            Self::NoData => write!(f, "no_data"),
        }
    }
}

/// Result of evaluating one fetched scrobble
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Most recent completed scrobble, if any
    pub event: Option<ScrobbleEvent>,
    /// Time since `event.played_at`
    pub elapsed: Option<TimeDelta>,
    /// Classification
    pub status: Freshness,
}

impl CheckResult {
    /// Whether an alert is warranted
    pub fn is_stale(&self) -> bool {
        self.status == Freshness::Stale
    }
}

/// Classify `event` relative to `now`
///
/// Stale only when the elapsed time is strictly greater than `threshold`.
/// A scrobble stamped in the future (clock skew) counts as fresh.
pub fn evaluate(
    event: Option<ScrobbleEvent>,
    now: DateTime<Utc>,
    threshold: TimeDelta,
) -> CheckResult {
    let Some(event) = event else {
        return CheckResult {
            event: None,
            elapsed: None,
            status: Freshness::NoData,
        };
    };

    let elapsed = now - event.played_at;
    let status = if elapsed > threshold {
        Freshness::Stale
    } else {
        Freshness::Fresh
    };

    CheckResult {
        event: Some(event),
        elapsed: Some(elapsed),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn scrobble_ago(ago: TimeDelta) -> ScrobbleEvent {
        ScrobbleEvent {
            track_name: "Reckoner".to_string(),
            artist_name: "Radiohead".to_string(),
            played_at: now() - ago,
        }
    }

    #[rstest]
    #[case::twelve_hour_threshold_thirteen_hours_ago(12, TimeDelta::hours(13), Freshness::Stale)]
    #[case::six_hour_threshold_five_hours_ago(6, TimeDelta::hours(5), Freshness::Fresh)]
    #[case::exactly_at_threshold(12, TimeDelta::hours(12), Freshness::Fresh)]
    #[case::one_second_past_threshold(
        12,
        TimeDelta::hours(12) + TimeDelta::seconds(1),
        Freshness::Stale
    )]
    #[case::just_scrobbled(6, TimeDelta::zero(), Freshness::Fresh)]
    #[case::future_timestamp(6, TimeDelta::minutes(-5), Freshness::Fresh)]
    fn test_classification(
        #[case] threshold_hours: i64,
        #[case] ago: TimeDelta,
        #[case] expected: Freshness,
    ) {
        let result = evaluate(
            Some(scrobble_ago(ago)),
            now(),
            TimeDelta::hours(threshold_hours),
        );
        assert_eq!(result.status, expected);
        assert_eq!(result.elapsed, Some(ago));
        assert_eq!(result.is_stale(), expected == Freshness::Stale);
    }

    #[test]
    fn test_no_event_is_no_data() {
        let result = evaluate(None, now(), TimeDelta::hours(12));
        assert_eq!(result.status, Freshness::NoData);
        assert!(result.event.is_none());
        assert!(result.elapsed.is_none());
        assert!(!result.is_stale());
    }

    #[test]
    fn test_event_is_kept() {
        let event = scrobble_ago(TimeDelta::hours(1));
        let result = evaluate(Some(event.clone()), now(), TimeDelta::hours(12));
        assert_eq!(result.event, Some(event));
    }

    #[test]
    fn test_freshness_display() {
        assert_eq!(Freshness::Fresh.to_string(), "fresh");
        assert_eq!(Freshness::Stale.to_string(), "stale");
        assert_eq!(Freshness::NoData.to_string(), "no_data");
    }
}
