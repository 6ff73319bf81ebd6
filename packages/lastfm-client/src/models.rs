//! Last.fm API response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LastfmError;

/// A completed play of a track, as reported by Last.fm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrobbleEvent {
    /// Track title
    pub track_name: String,
    /// Artist display name
    pub artist_name: String,
    /// When the play was scrobbled
    pub played_at: DateTime<Utc>,
}

impl std::fmt::Display for ScrobbleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.artist_name, self.track_name)
    }
}

// Internal response types for deserialization

#[derive(Debug, Deserialize)]
pub(crate) struct RecentTracksResponse {
    pub recenttracks: RecentTracksWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecentTracksWrapper {
    #[serde(default)]
    pub track: OneOrMany<RawTrack>,
}

/// Last.fm collapses single-element lists into a bare object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTrack {
    pub name: String,
    pub artist: RawArtist,
    #[serde(default)]
    pub date: Option<RawDate>,
    #[serde(rename = "@attr", default)]
    pub attr: Option<RawTrackAttr>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawArtist {
    #[serde(rename = "#text")]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDate {
    pub uts: RawUts,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawUts {
    Text(String),
    Number(i64),
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTrackAttr {
    #[serde(default)]
    pub nowplaying: Option<String>,
}

impl RawTrack {
    /// In-progress entries have no completion timestamp
    pub fn is_now_playing(&self) -> bool {
        self.attr
            .as_ref()
            .and_then(|attr| attr.nowplaying.as_deref())
            .is_some_and(|flag| flag.eq_ignore_ascii_case("true"))
    }
}

impl TryFrom<RawTrack> for ScrobbleEvent {
    type Error = LastfmError;

    fn try_from(raw: RawTrack) -> Result<Self, Self::Error> {
        let date = raw
            .date
            .ok_or_else(|| LastfmError::InvalidTimestamp("missing date".to_string()))?;

        let secs = match date.uts {
            RawUts::Number(secs) => secs,
            RawUts::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|e| LastfmError::InvalidTimestamp(format!("'{}': {}", text, e)))?,
        };

        let played_at = DateTime::<Utc>::from_timestamp(secs, 0)
            .ok_or_else(|| LastfmError::InvalidTimestamp(format!("{} out of range", secs)))?;

        Ok(Self {
            track_name: raw.name,
            artist_name: raw.artist.text,
            played_at,
        })
    }
}

/// Last.fm API error response
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: i32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_track_list_and_single_object() {
        let many: RecentTracksResponse = serde_json::from_value(json!({
            "recenttracks": { "track": [
                { "name": "A", "artist": { "#text": "X" }, "date": { "uts": "1" } },
                { "name": "B", "artist": { "#text": "Y" }, "date": { "uts": "2" } }
            ]}
        }))
        .unwrap();
        assert_eq!(many.recenttracks.track.into_vec().len(), 2);

        let one: RecentTracksResponse = serde_json::from_value(json!({
            "recenttracks": { "track":
                { "name": "A", "artist": { "#text": "X" }, "date": { "uts": "1" } }
            }
        }))
        .unwrap();
        assert_eq!(one.recenttracks.track.into_vec().len(), 1);
    }

    #[test]
    fn test_missing_track_list_is_empty() {
        let response: RecentTracksResponse =
            serde_json::from_value(json!({ "recenttracks": { "@attr": { "user": "rj" } } }))
                .unwrap();
        assert!(response.recenttracks.track.into_vec().is_empty());
    }

    #[test]
    fn test_now_playing_detection() {
        let track: RawTrack = serde_json::from_value(json!({
            "name": "Live",
            "artist": { "#text": "X" },
            "@attr": { "nowplaying": "true" }
        }))
        .unwrap();
        assert!(track.is_now_playing());

        let track: RawTrack = serde_json::from_value(json!({
            "name": "Done",
            "artist": { "#text": "X" },
            "date": { "uts": "1700000000", "#text": "14 Nov 2023, 22:13" }
        }))
        .unwrap();
        assert!(!track.is_now_playing());
    }

    #[test]
    fn test_timestamp_conversion_is_exact() {
        let raw: RawTrack = serde_json::from_value(json!({
            "name": "Paranoid Android",
            "artist": { "#text": "Radiohead", "mbid": "" },
            "date": { "uts": "1700000000" }
        }))
        .unwrap();

        let event = ScrobbleEvent::try_from(raw).unwrap();
        assert_eq!(event.played_at.timestamp(), 1_700_000_000);
        assert_eq!(event.track_name, "Paranoid Android");
        assert_eq!(event.artist_name, "Radiohead");
        assert_eq!(event.to_string(), "Radiohead - Paranoid Android");
    }

    #[test]
    fn test_numeric_uts_accepted() {
        let raw: RawTrack = serde_json::from_value(json!({
            "name": "A",
            "artist": { "#text": "X" },
            "date": { "uts": 42 }
        }))
        .unwrap();
        assert_eq!(ScrobbleEvent::try_from(raw).unwrap().played_at.timestamp(), 42);
    }

    #[test]
    fn test_bad_uts_rejected() {
        let raw: RawTrack = serde_json::from_value(json!({
            "name": "A",
            "artist": { "#text": "X" },
            "date": { "uts": "yesterday" }
        }))
        .unwrap();
        assert!(matches!(
            ScrobbleEvent::try_from(raw),
            Err(LastfmError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_missing_date_rejected() {
        let raw: RawTrack = serde_json::from_value(json!({
            "name": "A",
            "artist": { "#text": "X" }
        }))
        .unwrap();
        assert!(matches!(
            ScrobbleEvent::try_from(raw),
            Err(LastfmError::InvalidTimestamp(_))
        ));
    }
}
