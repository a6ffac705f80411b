//! Search endpoint implementation.

use canta_core::{Result, SearchHit};
use tracing::{debug, warn};

use crate::{
    context::{search_headers, SearchEnvelope},
    parser::collect_search_hits,
    types::RawSearchResponse,
    InnerTubeClient,
};

impl InnerTubeClient {
    /// Search `YouTube` Music for songs.
    ///
    /// Fails only on transport errors or a non-success upstream status.
    /// A response missing any expected branch is an empty result set, and
    /// items missing an id or title are dropped; order follows the
    /// provider's response.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let envelope = SearchEnvelope::songs(query);
        let url = self.search_url("search?prettyPrint=false");

        let body = self.post(&url, search_headers(), &envelope).await?;

        let response = match serde_json::from_slice::<RawSearchResponse>(&body) {
            Ok(response) => response,
            Err(e) => {
                warn!("search response did not decode, treating as empty: {e}");
                RawSearchResponse::default()
            }
        };

        let hits = collect_search_hits(&response);
        debug!(query, count = hits.len(), "search complete");
        Ok(hits)
    }
}
