//! Last.fm API client implementation

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use scrobblewatch_shared_config::LastfmConfig;
use tracing::{debug, instrument, warn};

use crate::error::{LastfmError, LastfmResult};
use crate::models::{ErrorResponse, RecentTracksResponse, ScrobbleEvent};

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Only the newest completed play is needed
const RECENT_TRACKS_LIMIT: &str = "1";

/// Last.fm error code for rate limiting
const RATE_LIMIT_ERROR_CODE: i32 = 29;

/// Maximum number of body characters kept in a `Status` error
const MAX_ERROR_BODY_LEN: usize = 512;

fn transport_error(e: reqwest::Error) -> LastfmError {
    if e.is_timeout() {
        LastfmError::Timeout
    } else {
        LastfmError::Http(e)
    }
}

/// Last.fm API client bound to a single user
#[derive(Clone)]
pub struct LastfmClient {
    http_client: Client,
    api_url: String,
    api_key: String,
    user: String,
}

impl fmt::Debug for LastfmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LastfmClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

impl LastfmClient {
    /// Create a new Last.fm client from configuration
    ///
    /// # Errors
    /// - `LastfmError::MissingApiKey` if the API key is empty
    /// - `LastfmError::InvalidInput` if the username is empty
    /// - `LastfmError::Http` if the HTTP client cannot be built
    pub fn new(config: &LastfmConfig) -> LastfmResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(LastfmError::MissingApiKey);
        }
        let user = config.user.trim();
        if user.is_empty() {
            return Err(LastfmError::InvalidInput(
                "username cannot be empty".to_string(),
            ));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .user_agent(concat!("scrobblewatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            user: user.to_string(),
        })
    }

    /// The Last.fm username this client checks
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Make an API request and handle transport-level failures
    ///
    /// Non-200 responses are turned into errors here so callers only
    /// ever parse bodies Last.fm marked as successful.
    async fn make_request(&self, params: &[(&str, &str)]) -> LastfmResult<String> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if status == StatusCode::OK {
            return Ok(text);
        }

        warn!(status = status.as_u16(), "Last.fm returned non-200 status");

        if let Some(error) = Self::parse_api_error(&text) {
            return Err(error);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LastfmError::RateLimited);
        }

        Err(LastfmError::Status {
            status: status.as_u16(),
            body: text.chars().take(MAX_ERROR_BODY_LEN).collect(),
        })
    }

    /// Parse response text as a Last.fm error document
    fn parse_api_error(text: &str) -> Option<LastfmError> {
        let error = serde_json::from_str::<ErrorResponse>(text).ok()?;
        if error.error == RATE_LIMIT_ERROR_CODE {
            return Some(LastfmError::RateLimited);
        }
        Some(LastfmError::Api {
            code: error.error,
            message: error.message,
        })
    }

    /// Get the user's most recent completed scrobble
    ///
    /// Issues a single `user.getrecenttracks` request with `limit=1`. Entries
    /// flagged as now playing are skipped; Last.fm returns such an entry in
    /// addition to the requested limit, so the completed play that follows
    /// it is used when present.
    ///
    /// # Errors
    /// - `LastfmError::NoRecentScrobble` - If no completed play is listed
    /// - `LastfmError::Api` - If Last.fm returns an error document
    /// - `LastfmError::Status` - If the response status is not 200
    /// - `LastfmError::Parse` / `LastfmError::InvalidTimestamp` - If the body is malformed
    /// - `LastfmError::Http` / `LastfmError::Timeout` - If the request fails
    #[instrument(skip(self), fields(user = %self.user))]
    pub async fn get_recent_scrobble(&self) -> LastfmResult<ScrobbleEvent> {
        debug!("Fetching most recent scrobble from Last.fm");

        let text = self
            .make_request(&[
                ("method", "user.getrecenttracks"),
                ("user", &self.user),
                ("api_key", &self.api_key),
                ("format", "json"),
                ("limit", RECENT_TRACKS_LIMIT),
            ])
            .await?;

        // Last.fm reports some failures with a 200 and an error document
        if let Some(error) = Self::parse_api_error(&text) {
            return Err(error);
        }

        let response: RecentTracksResponse = serde_json::from_str(&text)?;

        let track = response
            .recenttracks
            .track
            .into_vec()
            .into_iter()
            .find(|track| {
                let now_playing = track.is_now_playing();
                if now_playing {
                    debug!(track = %track.name, "Skipping now playing entry");
                }
                !now_playing
            })
            .ok_or(LastfmError::NoRecentScrobble)?;

        let event = ScrobbleEvent::try_from(track)?;

        debug!(
            played_at = %event.played_at,
            track = %event.track_name,
            artist = %event.artist_name,
            "Found most recent scrobble"
        );

        Ok(event)
    }
}
