//! Shared test utilities for the scrobblewatch workspace
//!
//! This crate provides mock implementations of the external services the
//! checker talks to, so tests run without network access.
//!
//! # Mock Services
//!
//! - [`MockLastfmServer`] - Mock Last.fm `user.getrecenttracks` endpoint
//! - [`MockGroupMeServer`] - Mock GroupMe bot post endpoint
//!
//! # Example
//!
//! ```rust,ignore
//! use scrobblewatch_test_utils::{MockLastfmServer, TrackFixture};
//!
//! #[tokio::test]
//! async fn test_with_mocks() {
//!     let lastfm = MockLastfmServer::start().await;
//!     lastfm.mock_recent_tracks(vec![TrackFixture::scrobbled("Idioteque", "Radiohead", 1_700_000_000)]).await;
//!
//!     // Use lastfm.api_url() to configure your client
//! }
//! ```

mod groupme;
mod lastfm;

pub use groupme::MockGroupMeServer;
pub use lastfm::{MockLastfmServer, TrackFixture};
