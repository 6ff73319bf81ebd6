//! Checker configuration loaded from environment variables
//!
//! The whole configuration is read once at process start and passed into
//! the [`Checker`](crate::Checker) explicitly. The two historical deployment
//! flavours (GroupMe alerts with a 12 hour threshold, console-only with a
//! 6 hour threshold) are both expressed through these settings.

use std::env;

use anyhow::{bail, Context, Result};
use chrono::TimeDelta;
use scrobblewatch_shared_config::{parse_env, parse_flag_env, GroupMeConfig, LastfmConfig};

/// Default staleness threshold in hours
pub const DEFAULT_STALENESS_HOURS: i64 = 12;

/// Log filter used when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_FILTER: &str =
    "scrobble_checker=info,scrobblewatch_lastfm_client=info,scrobblewatch_groupme_client=info";

/// Checker configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Last.fm account and endpoint
    pub lastfm: LastfmConfig,

    /// GroupMe bot; `None` means log-only mode
    pub groupme: Option<GroupMeConfig>,

    /// Maximum quiet period before the account is considered stale
    pub staleness_threshold: TimeDelta,

    /// Post a "starting check" notice before fetching
    pub notify_on_start: bool,

    /// Alert when no scrobble data could be obtained at all
    pub alert_on_no_data: bool,

    /// Tracing filter directive (`RUST_LOG`, then `LOG_LEVEL`)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let lastfm = LastfmConfig::from_env().context("Invalid Last.fm configuration")?;
        let groupme =
            GroupMeConfig::from_env_optional().context("Invalid GroupMe configuration")?;

        let hours: i64 = parse_env("SCROBBLE_STALENESS_HOURS", DEFAULT_STALENESS_HOURS)
            .context("Invalid SCROBBLE_STALENESS_HOURS value")?;

        Ok(Self {
            lastfm,
            groupme,
            staleness_threshold: threshold_from_hours(hours)?,
            notify_on_start: parse_flag_env("NOTIFY_ON_START", false)
                .context("Invalid NOTIFY_ON_START value")?,
            alert_on_no_data: parse_flag_env("ALERT_ON_NO_DATA", false)
                .context("Invalid ALERT_ON_NO_DATA value")?,
            log_level: log_level_from_env(),
        })
    }

    /// Create a log-only configuration with the default threshold
    pub fn new(lastfm: LastfmConfig) -> Self {
        Self {
            lastfm,
            groupme: None,
            staleness_threshold: TimeDelta::hours(DEFAULT_STALENESS_HOURS),
            notify_on_start: false,
            alert_on_no_data: false,
            log_level: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Send alerts through the given GroupMe bot
    pub fn with_groupme(mut self, groupme: GroupMeConfig) -> Self {
        self.groupme = Some(groupme);
        self
    }

    /// Override the staleness threshold
    pub fn with_threshold(mut self, threshold: TimeDelta) -> Self {
        self.staleness_threshold = threshold;
        self
    }

    /// Enable or disable the "starting check" notice
    pub fn with_notify_on_start(mut self, enabled: bool) -> Self {
        self.notify_on_start = enabled;
        self
    }

    /// Enable or disable alerting when no data is available
    pub fn with_alert_on_no_data(mut self, enabled: bool) -> Self {
        self.alert_on_no_data = enabled;
        self
    }

    /// Whether alerts are delivered anywhere besides the log
    pub fn has_notifications(&self) -> bool {
        self.groupme.is_some()
    }
}

/// Convert a positive hour count into a threshold
fn threshold_from_hours(hours: i64) -> Result<TimeDelta> {
    if hours <= 0 {
        bail!("SCROBBLE_STALENESS_HOURS must be positive, got {}", hours);
    }
    TimeDelta::try_hours(hours)
        .with_context(|| format!("SCROBBLE_STALENESS_HOURS is out of range: {}", hours))
}

fn log_level_from_env() -> String {
    env::var("RUST_LOG")
        .or_else(|_| env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}
