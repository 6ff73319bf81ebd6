//! GroupMe bot client implementation

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use scrobblewatch_shared_config::GroupMeConfig;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{GroupMeError, GroupMeResult};

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum number of body characters kept in an `UnexpectedStatus` error
const MAX_ERROR_BODY_LEN: usize = 512;

/// Bot post payload
#[derive(Debug, Serialize)]
struct BotPost<'a> {
    bot_id: &'a str,
    text: &'a str,
}

/// Client that posts messages as a single GroupMe bot
#[derive(Clone)]
pub struct GroupMeClient {
    http_client: Client,
    api_url: String,
    bot_id: String,
}

impl fmt::Debug for GroupMeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupMeClient")
            .field("api_url", &self.api_url)
            .field("bot_id", &"[REDACTED]")
            .finish()
    }
}

impl GroupMeClient {
    /// Create a new GroupMe client from configuration
    ///
    /// # Errors
    /// - `GroupMeError::MissingBotId` if the bot id is empty
    /// - `GroupMeError::Http` if the HTTP client cannot be built
    pub fn new(config: &GroupMeConfig) -> GroupMeResult<Self> {
        let bot_id = config.bot_id.trim();
        if bot_id.is_empty() {
            return Err(GroupMeError::MissingBotId);
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .user_agent(concat!("scrobblewatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            bot_id: bot_id.to_string(),
        })
    }

    /// Post a message to the bot's group
    ///
    /// GroupMe acknowledges bot posts with `202 Accepted`; any other status
    /// is reported as `GroupMeError::UnexpectedStatus`. No retries.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn post_message(&self, text: &str) -> GroupMeResult<()> {
        let payload = BotPost {
            bot_id: &self.bot_id,
            text,
        };

        let response = self
            .http_client
            .post(&self.api_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GroupMeError::Timeout
                } else {
                    GroupMeError::Http(e)
                }
            })?;

        let status = response.status();
        if status == StatusCode::ACCEPTED {
            debug!("GroupMe message accepted");
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_default()
            .chars()
            .take(MAX_ERROR_BODY_LEN)
            .collect();

        Err(GroupMeError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}
