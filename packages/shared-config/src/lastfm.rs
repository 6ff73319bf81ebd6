//! Last.fm configuration types

use crate::{get_env_or_default, get_required_env, parse_timeout_env, validate_http_url, ConfigResult};

/// Default Last.fm API endpoint
pub const DEFAULT_LASTFM_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Default Last.fm request timeout in seconds
const DEFAULT_LASTFM_TIMEOUT_SECS: u64 = 10;

/// Last.fm account and API configuration
#[derive(Clone)]
pub struct LastfmConfig {
    /// Last.fm username whose scrobbles are checked
    pub user: String,

    /// Last.fm API key
    pub api_key: String,

    /// API endpoint (overridable for testing)
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for LastfmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LastfmConfig")
            .field("user", &self.user)
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl LastfmConfig {
    /// Load Last.fm configuration from environment variables
    ///
    /// `LASTFM_API_KEY` and `LASTFM_USER` are required.
    pub fn from_env() -> ConfigResult<Self> {
        let api_key = get_required_env("LASTFM_API_KEY")?;
        let user = get_required_env("LASTFM_USER")?;

        let api_url = get_env_or_default("LASTFM_API_URL", DEFAULT_LASTFM_API_URL);
        validate_http_url("LASTFM_API_URL", &api_url)?;

        Ok(Self {
            user: user.trim().to_string(),
            api_key: api_key.trim().to_string(),
            api_url,
            timeout_secs: parse_timeout_env("LASTFM_TIMEOUT", DEFAULT_LASTFM_TIMEOUT_SECS)?,
        })
    }

    /// Create a configuration for the public Last.fm endpoint
    pub fn new(user: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            api_key: api_key.into(),
            api_url: DEFAULT_LASTFM_API_URL.to_string(),
            timeout_secs: DEFAULT_LASTFM_TIMEOUT_SECS,
        }
    }

    /// Point the configuration at a different endpoint (useful for testing)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
