//! GroupMe bot notification configuration types

use crate::{get_env_or_default, get_optional_env, parse_timeout_env, validate_http_url, ConfigResult};

/// Default GroupMe bot post endpoint
pub const DEFAULT_GROUPME_API_URL: &str = "https://api.groupme.com/v3/bots/post";

/// Default GroupMe request timeout in seconds
const DEFAULT_GROUPME_TIMEOUT_SECS: u64 = 10;

/// GroupMe bot configuration
#[derive(Clone)]
pub struct GroupMeConfig {
    /// Bot identifier that messages are posted as
    pub bot_id: String,

    /// Bot post endpoint (overridable for testing)
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GroupMeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupMeConfig")
            .field("bot_id", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GroupMeConfig {
    /// Load GroupMe configuration from environment variables
    ///
    /// Returns `Ok(None)` when `GROUPME_BOT_ID` is unset or blank, which
    /// disables notifications entirely.
    pub fn from_env_optional() -> ConfigResult<Option<Self>> {
        let Some(bot_id) = get_optional_env("GROUPME_BOT_ID") else {
            return Ok(None);
        };

        let api_url = get_env_or_default("GROUPME_API_URL", DEFAULT_GROUPME_API_URL);
        validate_http_url("GROUPME_API_URL", &api_url)?;

        Ok(Some(Self {
            bot_id: bot_id.trim().to_string(),
            api_url,
            timeout_secs: parse_timeout_env("GROUPME_TIMEOUT", DEFAULT_GROUPME_TIMEOUT_SECS)?,
        }))
    }

    /// Create a configuration for the public GroupMe endpoint
    pub fn new(bot_id: impl Into<String>) -> Self {
        Self {
            bot_id: bot_id.into(),
            api_url: DEFAULT_GROUPME_API_URL.to_string(),
            timeout_secs: DEFAULT_GROUPME_TIMEOUT_SECS,
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
