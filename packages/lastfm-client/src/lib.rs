//! Last.fm API client for the scrobble freshness checker
//!
//! This crate provides a small client for the Last.fm `user.getrecenttracks`
//! method, returning the most recent *completed* scrobble for one user.
//!
//! # Example
//!
//! ```rust,no_run
//! use scrobblewatch_lastfm_client::LastfmClient;
//! use scrobblewatch_shared_config::LastfmConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LastfmClient::new(&LastfmConfig::new("rj", "your_api_key"))?;
//!
//! let scrobble = client.get_recent_scrobble().await?;
//! println!("{} at {}", scrobble, scrobble.played_at);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `LASTFM_API_KEY`: API key for Last.fm (required)
//! - `LASTFM_USER`: Username to check (required)
//! - `LASTFM_API_URL`: Endpoint override
//! - `LASTFM_TIMEOUT`: Request timeout in seconds (default 10)

mod client;
mod error;
mod models;

pub use client::LastfmClient;
pub use error::{FetchErrorKind, LastfmError, LastfmResult};
pub use models::ScrobbleEvent;
