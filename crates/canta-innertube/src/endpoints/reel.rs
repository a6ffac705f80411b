//! Reel (short-form watch) endpoint implementation for audio URL
//! resolution.

use tracing::{debug, warn};

use crate::{
    context::{reel_headers, ReelEnvelope, REEL_URL_TOKEN},
    parser::select_audio_url,
    types::RawReelResponse,
    InnerTubeClient,
};

impl InnerTubeClient {
    /// Resolve a direct audio stream URL for a video.
    ///
    /// Never fails outward: transport errors, non-success statuses,
    /// undecodable bodies and tracks without a usable audio format all
    /// degrade to `None`. Not every track has a stream reachable through
    /// this path, so `None` is a normal outcome.
    pub async fn resolve_audio(&self, video_id: &str) -> Option<String> {
        let envelope = ReelEnvelope::for_video(video_id);
        let url = self.reel_url(&format!(
            "reel/reel_item_watch?prettyPrint=false&t={REEL_URL_TOKEN}&id={video_id}&$fields=playerResponse"
        ));

        let body = match self.post(&url, reel_headers(), &envelope).await {
            Ok(body) => body,
            Err(e) => {
                warn!(video_id, "audio resolution request failed: {e}");
                return None;
            }
        };

        let response = match serde_json::from_slice::<RawReelResponse>(&body) {
            Ok(response) => response,
            Err(e) => {
                warn!(video_id, "reel response did not decode: {e}");
                return None;
            }
        };

        let audio_url = select_audio_url(&response);
        debug!(video_id, resolved = audio_url.is_some(), "audio resolution complete");
        audio_url
    }
}
