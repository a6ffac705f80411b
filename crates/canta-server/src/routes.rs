//! The search route: validate the query, search, fan out audio
//! resolution, merge and respond.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use futures::future::join_all;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error};

use canta_core::ResolvedTrack;
use canta_innertube::InnerTubeClient;

/// Build the application router.
///
/// A permissive CORS layer is applied so browser clients can call the
/// endpoint directly.
pub fn app(client: InnerTubeClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(search))
        .layer(cors)
        .with_state(client)
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    s: Option<String>,
}

/// `GET /?s=<query>`
///
/// Responds 400 before any outbound call when the trimmed query is empty,
/// 500 with a generic body when the search upstream fails, and otherwise
/// 200 with the enriched results in search order. Per-track resolution
/// failures show up as `audioUrl: null`, never as a request failure.
async fn search(
    State(client): State<InnerTubeClient>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.s.as_deref().map_or("", str::trim);
    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing \"s\" query parameter" })),
        )
            .into_response();
    }

    let hits = match client.search(query).await {
        Ok(hits) => hits,
        Err(e) => {
            error!("search failed: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response();
        }
    };

    // One unthrottled resolution per hit, all awaited together; join_all
    // keeps the input order.
    let audio_urls = join_all(hits.iter().map(|hit| client.resolve_audio(&hit.video_id))).await;

    let tracks: Vec<ResolvedTrack> = hits
        .into_iter()
        .zip(audio_urls)
        .map(|(hit, audio_url)| ResolvedTrack::from_hit(hit, audio_url))
        .collect();

    debug!(query, count = tracks.len(), "request complete");
    Json(tracks).into_response()
}
