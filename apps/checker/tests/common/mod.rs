//! Common test utilities for checker integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, Utc};
use scrobble_checker::Config;
use scrobblewatch_shared_config::{GroupMeConfig, LastfmConfig};
use scrobblewatch_test_utils::{MockGroupMeServer, MockLastfmServer, TrackFixture};

pub use scrobblewatch_test_utils::TrackFixture as Track;

/// Fixed reference time for deterministic runs
pub fn now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
}

/// A completed play `ago` before [`now`]
pub fn scrobbled_ago(ago: TimeDelta) -> TrackFixture {
    TrackFixture::scrobbled("Everything In Its Right Place", "Radiohead", (now() - ago).timestamp())
}

/// Both mock services plus a configuration pointing at them
pub struct TestEnv {
    pub lastfm: MockLastfmServer,
    pub groupme: MockGroupMeServer,
}

impl TestEnv {
    pub async fn start() -> Self {
        Self {
            lastfm: MockLastfmServer::start().await,
            groupme: MockGroupMeServer::start().await,
        }
    }

    /// Log-only configuration with the given threshold
    pub fn log_only_config(&self, threshold_hours: i64) -> Config {
        Config::new(
            LastfmConfig::new(self.lastfm.user(), self.lastfm.api_key())
                .with_api_url(self.lastfm.api_url()),
        )
        .with_threshold(TimeDelta::hours(threshold_hours))
    }

    /// Configuration that alerts through the mock GroupMe bot
    pub fn alerting_config(&self, threshold_hours: i64) -> Config {
        self.log_only_config(threshold_hours).with_groupme(
            GroupMeConfig::new(self.groupme.bot_id()).with_api_url(self.groupme.api_url()),
        )
    }
}
