//! GroupMe client error types

use thiserror::Error;

/// GroupMe bot client errors
#[derive(Error, Debug)]
pub enum GroupMeError {
    /// Bot id is missing
    #[error("bot id is required to post GroupMe messages")]
    MissingBotId,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("request to GroupMe timed out")]
    Timeout,

    /// GroupMe answered with something other than 202 Accepted
    #[error("unexpected GroupMe status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

/// Result type for GroupMe operations
pub type GroupMeResult<T> = Result<T, GroupMeError>;
