//! Core domain types for canta.

use serde::{Deserialize, Serialize};

/// A single track matched by a search, before audio resolution.
///
/// Produced in the provider's response order; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// `YouTube` video ID.
    pub video_id: String,
    /// Track title.
    pub title: String,
    /// Largest thumbnail URL, if the renderer carried any.
    pub thumbnail: Option<String>,
}

impl SearchHit {
    pub fn new(video_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            thumbnail: None,
        }
    }

    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }
}

/// A search hit merged with the outcome of its audio resolution.
///
/// `audio_url` is `None` when resolution failed or no audio stream was
/// available; the hit itself is still returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTrack {
    /// `YouTube` video ID.
    pub video_id: String,
    /// Track title.
    pub title: String,
    /// Largest thumbnail URL, if any.
    pub thumbnail: Option<String>,
    /// Direct audio stream URL, if one was resolved.
    pub audio_url: Option<String>,
}

impl ResolvedTrack {
    /// Merge a search hit with the outcome of its resolution.
    pub fn from_hit(hit: SearchHit, audio_url: Option<String>) -> Self {
        Self {
            video_id: hit.video_id,
            title: hit.title,
            thumbnail: hit.thumbnail,
            audio_url,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_creation() {
        let hit = SearchHit::new("abc123", "Test Song").with_thumbnail("https://img/1.jpg");
        assert_eq!(hit.video_id, "abc123");
        assert_eq!(hit.thumbnail.as_deref(), Some("https://img/1.jpg"));
    }

    #[test]
    fn test_resolved_track_field_names() {
        let track = ResolvedTrack::from_hit(SearchHit::new("abc123", "Test Song"), None);
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["videoId"], "abc123");
        assert_eq!(json["title"], "Test Song");
        assert!(json["thumbnail"].is_null());
        assert!(json["audioUrl"].is_null());
    }

    #[test]
    fn test_resolved_track_keeps_hit_fields() {
        let hit = SearchHit::new("id1", "Title").with_thumbnail("t.jpg");
        let track = ResolvedTrack::from_hit(hit, Some("https://audio/url".into()));
        assert_eq!(track.thumbnail.as_deref(), Some("t.jpg"));
        assert_eq!(track.audio_url.as_deref(), Some("https://audio/url"));
    }
}
