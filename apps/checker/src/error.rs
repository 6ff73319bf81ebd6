//! Error types for checker startup
//!
//! Failures during a run never surface as errors: fetch problems collapse
//! to "no data" and notification problems are only logged. What remains
//! is building the clients from configuration.

use scrobblewatch_groupme_client::GroupMeError;
use scrobblewatch_lastfm_client::LastfmError;
use thiserror::Error;

/// Errors raised while assembling a [`Checker`](crate::Checker)
#[derive(Error, Debug)]
pub enum CheckerError {
    /// Last.fm client could not be built
    #[error("Last.fm client setup failed: {0}")]
    Lastfm(#[from] LastfmError),

    /// GroupMe client could not be built
    #[error("GroupMe client setup failed: {0}")]
    GroupMe(#[from] GroupMeError),
}

/// Result type alias for checker setup
pub type CheckerResult<T> = Result<T, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckerError::from(LastfmError::MissingApiKey);
        assert_eq!(
            err.to_string(),
            "Last.fm client setup failed: API key is required for Last.fm API access"
        );

        let err = CheckerError::from(GroupMeError::MissingBotId);
        assert_eq!(
            err.to_string(),
            "GroupMe client setup failed: bot id is required to post GroupMe messages"
        );
    }
}
