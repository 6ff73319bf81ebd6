//! Mock Last.fm server for testing scrobble fetches
//!
//! Provides a [`MockLastfmServer`] that simulates the `user.getrecenttracks`
//! method for testing without a real Last.fm API key.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock serves the Last.fm API on
const API_PATH: &str = "/2.0/";

/// Mock Last.fm server
///
/// Wraps a [`wiremock::MockServer`] and provides convenience methods for
/// common recent-tracks responses and error scenarios.
pub struct MockLastfmServer {
    server: MockServer,
    user: String,
    api_key: String,
}

impl MockLastfmServer {
    /// Start a new mock Last.fm server with default credentials
    pub async fn start() -> Self {
        Self::start_with_credentials("testuser", "test-api-key").await
    }

    /// Start a new mock Last.fm server that expects the given user and key
    pub async fn start_with_credentials(user: &str, api_key: &str) -> Self {
        let server = MockServer::start().await;
        Self {
            server,
            user: user.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Full API URL to configure the client with
    pub fn api_url(&self) -> String {
        format!("{}{}", self.server.uri(), API_PATH)
    }

    /// Expected username
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Expected API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Number of requests the server has received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    fn recent_tracks_request(&self) -> wiremock::MockBuilder {
        Mock::given(method("GET"))
            .and(path(API_PATH))
            .and(query_param("method", "user.getrecenttracks"))
            .and(query_param("user", self.user.as_str()))
            .and(query_param("api_key", self.api_key.as_str()))
            .and(query_param("format", "json"))
            .and(query_param("limit", "1"))
    }

    /// Mount a successful recent-tracks response with the given entries
    pub async fn mock_recent_tracks(&self, tracks: Vec<TrackFixture>) {
        let tracks_json: Vec<serde_json::Value> = tracks.iter().map(|t| t.to_json()).collect();

        self.recent_tracks_request()
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "recenttracks": {
                    "track": tracks_json,
                    "@attr": {
                        "user": self.user,
                        "page": "1",
                        "perPage": "1",
                        "totalPages": "1",
                        "total": tracks.len().to_string()
                    }
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a response for a user with no listening history
    pub async fn mock_empty_history(&self) {
        self.mock_recent_tracks(Vec::new()).await;
    }

    /// Mount a Last.fm error document with the given HTTP status
    pub async fn mock_api_error(&self, status: u16, code: i32, message: &str) {
        self.recent_tracks_request()
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": code,
                "message": message
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a plain-text response with the given status
    pub async fn mock_status(&self, status: u16, body: &str) {
        self.recent_tracks_request()
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}

/// Fixture for a `recenttracks.track` entry
#[derive(Debug, Clone)]
pub struct TrackFixture {
    pub name: String,
    pub artist: String,
    pub uts: Option<i64>,
    pub now_playing: bool,
}

impl TrackFixture {
    /// A completed play at the given epoch seconds
    pub fn scrobbled(name: &str, artist: &str, uts: i64) -> Self {
        Self {
            name: name.to_string(),
            artist: artist.to_string(),
            uts: Some(uts),
            now_playing: false,
        }
    }

    /// An in-progress entry, which Last.fm lists without a date
    pub fn now_playing(name: &str, artist: &str) -> Self {
        Self {
            name: name.to_string(),
            artist: artist.to_string(),
            uts: None,
            now_playing: true,
        }
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        let mut track = json!({
            "name": self.name,
            "mbid": "",
            "url": format!(
                "https://www.last.fm/music/{}/_/{}",
                self.artist.replace(' ', "+"),
                self.name.replace(' ', "+")
            ),
            "artist": { "#text": self.artist, "mbid": "" },
            "album": { "#text": "", "mbid": "" },
            "streamable": "0"
        });

        if let Some(uts) = self.uts {
            track["date"] = json!({ "uts": uts.to_string(), "#text": "" });
        }
        if self.now_playing {
            track["@attr"] = json!({ "nowplaying": "true" });
        }

        track
    }
}
