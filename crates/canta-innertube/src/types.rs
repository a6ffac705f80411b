//! Raw `InnerTube` response structures.
//!
//! Every level is optional: the upstream freely omits branches, and a
//! missing branch means "no results here", never a decode error.

use serde::Deserialize;

/// Raw response from the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchResponse {
    pub contents: Option<SearchContents>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContents {
    pub tabbed_search_results_renderer: Option<TabbedSearchResultsRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabbedSearchResultsRenderer {
    #[serde(default)]
    pub tabs: Vec<SearchTab>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTab {
    pub tab_renderer: Option<TabRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabRenderer {
    pub content: Option<TabContent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContent {
    pub section_list_renderer: Option<SectionListRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionListRenderer {
    pub contents: Option<Vec<SectionContent>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionContent {
    pub music_shelf_renderer: Option<MusicShelfRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicShelfRenderer {
    pub contents: Option<Vec<ShelfItem>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfItem {
    pub music_responsive_list_item_renderer: Option<MusicResponsiveListItemRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicResponsiveListItemRenderer {
    pub flex_columns: Option<Vec<FlexColumn>>,
    pub thumbnail: Option<ThumbnailRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexColumn {
    pub music_responsive_list_item_flex_column_renderer: Option<FlexColumnRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexColumnRenderer {
    pub text: Option<TextRuns>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRuns {
    pub runs: Option<Vec<TextRun>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub text: Option<String>,
    pub navigation_endpoint: Option<NavigationEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEndpoint {
    pub watch_endpoint: Option<WatchEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEndpoint {
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRenderer {
    pub music_thumbnail_renderer: Option<MusicThumbnailRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicThumbnailRenderer {
    pub thumbnail: Option<ThumbnailContainer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailContainer {
    pub thumbnails: Option<Vec<ThumbnailItem>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailItem {
    pub url: Option<String>,
}

/// Raw response from the reel endpoint, masked down to `playerResponse`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReelResponse {
    pub player_response: Option<PlayerResponse>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub streaming_data: Option<StreamingData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingData {
    pub adaptive_formats: Option<Vec<AdaptiveFormat>>,
}

/// One adaptive (single-medium) stream offered for a track.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveFormat {
    pub itag: Option<u32>,
    pub url: Option<String>,
    pub mime_type: Option<String>,
    pub bitrate: Option<u32>,
    pub audio_quality: Option<String>,
}

impl AdaptiveFormat {
    /// Whether this format is any audio stream.
    pub fn is_audio(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|m| m.starts_with("audio/"))
    }

    /// Whether this format is the preferred MPEG-4 HE-AAC stream.
    pub fn is_preferred_audio(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|m| m.contains(r#"audio/mp4; codecs="mp4a.40.5""#))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_classification() {
        let format: AdaptiveFormat = serde_json::from_str(
            r#"{"itag":139,"mimeType":"audio/mp4; codecs=\"mp4a.40.5\"","url":"https://a"}"#,
        )
        .unwrap();
        assert!(format.is_audio());
        assert!(format.is_preferred_audio());

        let webm: AdaptiveFormat =
            serde_json::from_str(r#"{"mimeType":"audio/webm; codecs=\"opus\""}"#).unwrap();
        assert!(webm.is_audio());
        assert!(!webm.is_preferred_audio());

        let video: AdaptiveFormat =
            serde_json::from_str(r#"{"mimeType":"video/mp4; codecs=\"avc1\""}"#).unwrap();
        assert!(!video.is_audio());
    }
}
