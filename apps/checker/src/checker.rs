//! Run orchestration
//!
//! One linear pass per invocation: optional start notice, fetch, evaluate,
//! then alert or log. Scheduling is left to an external trigger.

use chrono::{DateTime, TimeDelta, Utc};
use scrobblewatch_lastfm_client::{FetchErrorKind, LastfmClient, ScrobbleEvent};
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::error::CheckerResult;
use crate::evaluator::{evaluate, CheckResult, Freshness};
use crate::notifier::{Notifier, NotifyOutcome};

/// Notice posted before the check when `notify_on_start` is set
pub const START_MESSAGE: &str = "Checking Last.fm scrobble status...";

/// Summary of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Evaluation of the fetched scrobble
    pub result: CheckResult,
    /// Outcome of the start notice, if one was due
    pub start_notice: Option<NotifyOutcome>,
    /// Outcome of the alert, if one was due
    pub alert: Option<NotifyOutcome>,
}

/// Scrobble freshness checker
#[derive(Debug, Clone)]
pub struct Checker {
    lastfm: LastfmClient,
    notifier: Notifier,
    threshold: TimeDelta,
    notify_on_start: bool,
    alert_on_no_data: bool,
}

impl Checker {
    /// Build a checker and its clients from configuration
    pub fn from_config(config: &Config) -> CheckerResult<Self> {
        Ok(Self {
            lastfm: LastfmClient::new(&config.lastfm)?,
            notifier: Notifier::new(config.groupme.as_ref())?,
            threshold: config.staleness_threshold,
            notify_on_start: config.notify_on_start,
            alert_on_no_data: config.alert_on_no_data,
        })
    }

    /// Run one check against the current time
    pub async fn run(&self) -> RunReport {
        self.run_at(Utc::now()).await
    }

    /// Run one check as if the current time were `now`
    #[instrument(skip(self), fields(user = %self.lastfm.user()))]
    pub async fn run_at(&self, now: DateTime<Utc>) -> RunReport {
        let start_notice = if self.notify_on_start {
            Some(self.notifier.notify(START_MESSAGE).await)
        } else {
            None
        };

        let event = self.fetch().await;
        let result = evaluate(event, now, self.threshold);
        let alert = self.report(&result).await;

        RunReport {
            result,
            start_notice,
            alert,
        }
    }

    /// Fetch the latest completed scrobble, collapsing every failure to `None`
    async fn fetch(&self) -> Option<ScrobbleEvent> {
        match self.lastfm.get_recent_scrobble().await {
            Ok(event) => Some(event),
            Err(e) if e.kind() == FetchErrorKind::NoData => {
                info!("Last.fm returned no completed scrobble");
                None
            }
            Err(e) => {
                warn!(kind = %e.kind(), error = %e, "Error fetching recent scrobble");
                None
            }
        }
    }

    /// Log the result and send an alert when one is warranted
    async fn report(&self, result: &CheckResult) -> Option<NotifyOutcome> {
        let hours = self.threshold.num_hours();

        match (&result.status, &result.event) {
            (Freshness::Stale, Some(event)) => {
                warn!(
                    elapsed_secs = result.elapsed.map(|e| e.num_seconds()),
                    "Alert: No scrobble in the past {} hours. Last scrobble at {} with \"{}\"",
                    hours,
                    event.played_at,
                    event
                );
                Some(self.notifier.notify(&self.stale_message()).await)
            }
            (Freshness::Fresh, Some(event)) => {
                info!(
                    elapsed_secs = result.elapsed.map(|e| e.num_seconds()),
                    "All good. Last scrobble at {} with \"{}\"",
                    event.played_at,
                    event
                );
                None
            }
            _ => {
                warn!("No recent scrobble found or error fetching data.");
                if self.alert_on_no_data {
                    Some(self.notifier.notify(&self.no_data_message()).await)
                } else {
                    None
                }
            }
        }
    }

    fn stale_message(&self) -> String {
        format!(
            "WARNING: No scrobbles detected on \"{}\" in the past {} hours.",
            self.lastfm.user(),
            self.threshold.num_hours()
        )
    }

    fn no_data_message(&self) -> String {
        format!(
            "WARNING: Could not retrieve recent scrobbles for \"{}\".",
            self.lastfm.user()
        )
    }
}
