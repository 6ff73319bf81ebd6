//! Last.fm API error types

use thiserror::Error;

/// Last.fm API client errors
#[derive(Error, Debug)]
pub enum LastfmError {
    /// API key is missing or invalid
    #[error("API key is required for Last.fm API access")]
    MissingApiKey,

    /// Invalid input provided to the client
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request to Last.fm timed out")]
    Timeout,

    /// Rate limited by Last.fm
    #[error("Rate limited by Last.fm API")]
    RateLimited,

    /// Non-200 response without a Last.fm error document
    #[error("Last.fm responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Last.fm API returned an error document
    #[error("Last.fm API error {code}: {message}")]
    Api { code: i32, message: String },

    /// JSON parsing failed
    #[error("Failed to parse Last.fm response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Track entry carried an unusable `date.uts` value
    #[error("Invalid scrobble timestamp: {0}")]
    InvalidTimestamp(String),

    /// No completed scrobble in the response
    #[error("No completed scrobble found in recent tracks")]
    NoRecentScrobble,
}

/// Coarse classification of fetch failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Request failed, timed out or was rejected at the HTTP level
    Network,
    /// Last.fm answered with an error document
    Api,
    /// Response body did not have the expected shape
    MalformedResponse,
    /// Response was well-formed but held no completed scrobble
    NoData,
    /// Client was constructed with unusable settings
    Configuration,
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Api => write!(f, "api_error"),
            Self::MalformedResponse => write!(f, "malformed_response"),
            Self::NoData => write!(f, "no_data"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}

impl LastfmError {
    /// Classify this error
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            LastfmError::Http(_)
            | LastfmError::Timeout
            | LastfmError::RateLimited
            | LastfmError::Status { .. } => FetchErrorKind::Network,
            LastfmError::Api { .. } => FetchErrorKind::Api,
            LastfmError::Parse(_) | LastfmError::InvalidTimestamp(_) => {
                FetchErrorKind::MalformedResponse
            }
            LastfmError::NoRecentScrobble => FetchErrorKind::NoData,
            LastfmError::MissingApiKey | LastfmError::InvalidInput(_) => {
                FetchErrorKind::Configuration
            }
        }
    }
}

/// Result type for Last.fm operations
pub type LastfmResult<T> = Result<T, LastfmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(LastfmError::Timeout.kind(), FetchErrorKind::Network);
        assert_eq!(LastfmError::RateLimited.kind(), FetchErrorKind::Network);
        assert_eq!(
            LastfmError::Status {
                status: 503,
                body: String::new()
            }
            .kind(),
            FetchErrorKind::Network
        );
        assert_eq!(
            LastfmError::Api {
                code: 6,
                message: "User not found".to_string()
            }
            .kind(),
            FetchErrorKind::Api
        );
        assert_eq!(
            LastfmError::InvalidTimestamp("abc".to_string()).kind(),
            FetchErrorKind::MalformedResponse
        );
        assert_eq!(LastfmError::NoRecentScrobble.kind(), FetchErrorKind::NoData);
        assert_eq!(LastfmError::MissingApiKey.kind(), FetchErrorKind::Configuration);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FetchErrorKind::MalformedResponse.to_string(), "malformed_response");
        assert_eq!(FetchErrorKind::Api.to_string(), "api_error");
        assert_eq!(FetchErrorKind::NoData.to_string(), "no_data");
    }
}
