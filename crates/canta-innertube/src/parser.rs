//! Parsers turning raw `InnerTube` responses into domain types.

use canta_core::SearchHit;

use crate::types::{
    MusicResponsiveListItemRenderer, RawReelResponse, RawSearchResponse, SectionListRenderer,
};

/// Collect search hits from a raw search response.
///
/// Walks tabs, then each tab's section list, then each section's music
/// shelf, in the provider's order. Any absent branch contributes nothing;
/// items missing an id or a title are dropped.
pub fn collect_search_hits(response: &RawSearchResponse) -> Vec<SearchHit> {
    let mut hits = Vec::new();

    if let Some(contents) = &response.contents {
        if let Some(tabbed) = &contents.tabbed_search_results_renderer {
            for tab in &tabbed.tabs {
                if let Some(tab_renderer) = &tab.tab_renderer {
                    if let Some(content) = &tab_renderer.content {
                        if let Some(section_list) = &content.section_list_renderer {
                            collect_from_section_list(section_list, &mut hits);
                        }
                    }
                }
            }
        }
    }

    hits
}

fn collect_from_section_list(section_list: &SectionListRenderer, hits: &mut Vec<SearchHit>) {
    if let Some(sections) = &section_list.contents {
        for section in sections {
            if let Some(shelf) = &section.music_shelf_renderer {
                if let Some(items) = &shelf.contents {
                    for item in items {
                        if let Some(renderer) = &item.music_responsive_list_item_renderer {
                            if let Some(hit) = parse_hit(renderer) {
                                hits.push(hit);
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Parse one responsive-list-item renderer into a hit.
///
/// The first flex column's first text run carries both the title text and
/// the watch endpoint with the video id. Either missing means no hit.
fn parse_hit(renderer: &MusicResponsiveListItemRenderer) -> Option<SearchHit> {
    let run = renderer
        .flex_columns
        .as_ref()?
        .first()?
        .music_responsive_list_item_flex_column_renderer
        .as_ref()?
        .text
        .as_ref()?
        .runs
        .as_ref()?
        .first()?;

    let video_id = run
        .navigation_endpoint
        .as_ref()?
        .watch_endpoint
        .as_ref()?
        .video_id
        .clone()?;
    let title = run.text.clone()?;

    let mut hit = SearchHit::new(video_id, title);
    if let Some(url) = largest_thumbnail(renderer) {
        hit = hit.with_thumbnail(url);
    }
    Some(hit)
}

/// URL of the last (largest) thumbnail entry, if any are present.
fn largest_thumbnail(renderer: &MusicResponsiveListItemRenderer) -> Option<String> {
    renderer
        .thumbnail
        .as_ref()?
        .music_thumbnail_renderer
        .as_ref()?
        .thumbnail
        .as_ref()?
        .thumbnails
        .as_ref()?
        .last()?
        .url
        .clone()
}

/// Select a direct audio URL from a raw reel response.
///
/// Prefers the MPEG-4 `mp4a.40.5` stream; falls back to the first stream
/// of any audio media type; `None` when neither exists or the formats
/// list is absent.
pub fn select_audio_url(response: &RawReelResponse) -> Option<String> {
    let formats = response
        .player_response
        .as_ref()?
        .streaming_data
        .as_ref()?
        .adaptive_formats
        .as_ref()?;

    formats
        .iter()
        .find(|f| f.is_preferred_audio())
        .and_then(|f| f.url.clone())
        .or_else(|| {
            formats
                .iter()
                .find(|f| f.is_audio())
                .and_then(|f| f.url.clone())
        })
}
